//! Bundle manifest declaration parsing.
//!
//! # Responsibility
//! - Parse `manifest.json` into the three known optional sections.
//! - Collect referenced handler paths in verification order.
//!
//! # Invariants
//! - A present section must carry a `handler` string; nothing else about the
//!   section is assumed or validated.
//! - Collection preserves manifest order and duplicates.

use serde::Deserialize;

/// Parsed bundle manifest.
///
/// All three top-level keys are optional; an absent key contributes no
/// handler paths. Platform manifests carry many more fields than these, so
/// unknown fields deserialize without error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleManifest {
    /// Bot component declaration.
    pub bot: Option<HandlerSection>,
    /// Slash-command declarations in manifest order.
    pub commands: Option<Vec<HandlerSection>>,
    /// Widget component declaration.
    pub widget: Option<HandlerSection>,
}

/// One manifest section naming a handler file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HandlerSection {
    /// Handler file path, relative to the bundle root.
    pub handler: String,
}

impl BundleManifest {
    /// Parses manifest text as JSON.
    ///
    /// # Errors
    /// - Returns the underlying `serde_json` error both for malformed JSON
    ///   and for a present section that does not match the expected shape.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Collects handler paths in verification order.
    ///
    /// # Contract
    /// - Order: `bot`, then `commands` in array order, then `widget`.
    /// - Duplicates are preserved; no deduplication.
    pub fn handler_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        if let Some(bot) = &self.bot {
            paths.push(bot.handler.as_str());
        }
        if let Some(commands) = &self.commands {
            for command in commands {
                paths.push(command.handler.as_str());
            }
        }
        if let Some(widget) = &self.widget {
            paths.push(widget.handler.as_str());
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::BundleManifest;

    #[test]
    fn parses_manifest_with_all_sections() {
        let manifest = BundleManifest::parse(
            r#"{
                "bot": { "handler": "Bots/teambot.dg" },
                "commands": [
                    { "handler": "Commands/assign.dg" },
                    { "handler": "Commands/report.dg" }
                ],
                "widget": { "handler": "Widgets/dashboard.dg" }
            }"#,
        )
        .expect("well-formed manifest should parse");

        assert_eq!(
            manifest.handler_paths(),
            vec![
                "Bots/teambot.dg",
                "Commands/assign.dg",
                "Commands/report.dg",
                "Widgets/dashboard.dg",
            ]
        );
    }

    #[test]
    fn absent_sections_contribute_no_handlers() {
        let manifest =
            BundleManifest::parse(r#"{ "widget": { "handler": "Widgets/w.dg" } }"#)
                .expect("single-section manifest should parse");

        assert!(manifest.bot.is_none());
        assert!(manifest.commands.is_none());
        assert_eq!(manifest.handler_paths(), vec!["Widgets/w.dg"]);
    }

    #[test]
    fn empty_manifest_collects_nothing() {
        let manifest = BundleManifest::parse("{}").expect("empty object should parse");
        assert!(manifest.handler_paths().is_empty());
    }

    #[test]
    fn rejects_section_without_handler_field() {
        let err = BundleManifest::parse(r#"{ "bot": { "name": "teambot" } }"#)
            .expect_err("bot without handler must fail");
        assert!(err.to_string().contains("handler"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(BundleManifest::parse("{ not json").is_err());
        assert!(BundleManifest::parse("").is_err());
    }

    #[test]
    fn rejects_non_object_top_level() {
        assert!(BundleManifest::parse(r#"["bot"]"#).is_err());
    }
}
