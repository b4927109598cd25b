//! Tool-permission injection
//!
//! When the caller supplies an allowed-tool list and a command's metadata
//! marks it as requesting specific tools, the generated file gets an
//! `allowed-tools` frontmatter line carrying the requested set filtered
//! to the allowed list, comma-joined. An empty filtered set injects no
//! line.

use cmdkit_content::frontmatter;

/// Frontmatter key for the injected permission line.
pub const ALLOWED_TOOLS_KEY: &str = "allowed-tools";

/// Inject the tool-permission line into a command's frontmatter.
/// Returns the (possibly unchanged) content and whether a line was added.
pub fn inject_allowed_tools(
    content: &str,
    requested: &[String],
    allowed: &[String],
) -> (String, bool) {
    let permitted: Vec<&str> = requested
        .iter()
        .filter(|tool| allowed.contains(tool))
        .map(String::as_str)
        .collect();

    if permitted.is_empty() {
        return (content.to_string(), false);
    }

    let line = permitted.join(", ");
    (
        frontmatter::insert_field(content, ALLOWED_TOOLS_KEY, &line),
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inject_filters_to_allowed() {
        let doc = "---\ndescription: X\n---\nbody\n";
        let (result, injected) = inject_allowed_tools(
            doc,
            &tools(&["Bash", "Read", "WebSearch"]),
            &tools(&["Bash", "Read"]),
        );
        assert!(injected);
        assert!(result.contains("allowed-tools: Bash, Read\n"));
        assert!(!result.contains("WebSearch"));
    }

    #[test]
    fn test_inject_preserves_requested_order() {
        let doc = "---\ndescription: X\n---\nbody\n";
        let (result, _) =
            inject_allowed_tools(doc, &tools(&["Read", "Bash"]), &tools(&["Bash", "Read"]));
        assert!(result.contains("allowed-tools: Read, Bash\n"));
    }

    #[test]
    fn test_empty_intersection_injects_nothing() {
        let doc = "---\ndescription: X\n---\nbody\n";
        let (result, injected) = inject_allowed_tools(doc, &tools(&["Bash"]), &tools(&["Read"]));
        assert!(!injected);
        assert_eq!(result, doc);
    }

    #[test]
    fn test_no_requested_tools_injects_nothing() {
        let doc = "---\ndescription: X\n---\nbody\n";
        let (result, injected) = inject_allowed_tools(doc, &[], &tools(&["Bash"]));
        assert!(!injected);
        assert_eq!(result, doc);
    }
}
