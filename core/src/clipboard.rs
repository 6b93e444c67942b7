pub const COPIED_LABEL: &str = "Copied!";

/// First non-empty candidate, in the order the IP field exposes them.
pub fn resolve_copy_text(
    value: Option<&str>,
    value_attr: Option<&str>,
    text_content: Option<&str>,
    default: &str,
) -> String {
    [value, value_attr, text_content]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(default)
        .to_string()
}

pub fn copy_failed_message(text: &str) -> String {
    format!("Copy failed. IP: {text}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonFace {
    pub label: String,
    pub disabled: bool,
}

/// Button faces for the transient "Copied!" confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    previous_label: String,
}

impl CopyFeedback {
    pub fn new(previous_label: &str) -> Self {
        Self {
            previous_label: previous_label.to_string(),
        }
    }

    pub fn confirming(&self) -> ButtonFace {
        ButtonFace {
            label: COPIED_LABEL.to_string(),
            disabled: true,
        }
    }

    /// The button is only ever disabled while confirming.
    pub fn restored(&self) -> ButtonFace {
        ButtonFace {
            label: self.previous_label.clone(),
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_text_prefers_live_value() {
        let text = resolve_copy_text(Some("http://10.0.0.2"), Some("x"), None, "d");
        assert_eq!(text, "http://10.0.0.2");
    }

    #[test]
    fn copy_text_skips_empty_candidates() {
        let text = resolve_copy_text(Some(""), None, Some("192.168.4.1"), "d");
        assert_eq!(text, "192.168.4.1");
        let text = resolve_copy_text(Some(""), Some(""), Some(""), "http://192.168.4.1");
        assert_eq!(text, "http://192.168.4.1");
    }

    #[test]
    fn feedback_round_trip() {
        let feedback = CopyFeedback::new("Copy IP");
        assert_eq!(feedback.confirming().label, "Copied!");
        assert!(feedback.confirming().disabled);
        assert_eq!(
            feedback.restored(),
            ButtonFace {
                label: "Copy IP".to_string(),
                disabled: false
            }
        );
    }

    #[test]
    fn failure_message_carries_value() {
        assert_eq!(copy_failed_message("http://192.168.4.1"), "Copy failed. IP: http://192.168.4.1");
    }
}
