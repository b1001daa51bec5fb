use std::fmt;

/// One stage of the publish sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishStep {
    Stage,
    Commit,
    Tag,
    Push,
    PushTags,
}

impl PublishStep {
    /// Every step, in the order the publisher runs them
    pub const SEQUENCE: [PublishStep; 5] = [
        PublishStep::Stage,
        PublishStep::Commit,
        PublishStep::Tag,
        PublishStep::Push,
        PublishStep::PushTags,
    ];

    /// Short label used in progress and failure output
    pub fn name(&self) -> &'static str {
        match self {
            PublishStep::Stage => "stage",
            PublishStep::Commit => "commit",
            PublishStep::Tag => "tag",
            PublishStep::Push => "push",
            PublishStep::PushTags => "push tags",
        }
    }
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_order() {
        assert_eq!(PublishStep::SEQUENCE.first(), Some(&PublishStep::Stage));
        assert_eq!(PublishStep::SEQUENCE.last(), Some(&PublishStep::PushTags));
    }

    #[test]
    fn test_display() {
        assert_eq!(PublishStep::PushTags.to_string(), "push tags");
    }
}
