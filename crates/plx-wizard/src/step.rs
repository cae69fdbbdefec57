use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Template,
    Details,
    Parameters,
    Preview,
    Done,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::Template,
        Self::Details,
        Self::Parameters,
        Self::Preview,
        Self::Done,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Template => 0,
            Self::Details => 1,
            Self::Parameters => 2,
            Self::Preview => 3,
            Self::Done => 4,
        }
    }

    /// `None` past the last step.
    #[must_use]
    pub const fn following(self) -> Option<Self> {
        match self {
            Self::Template => Some(Self::Details),
            Self::Details => Some(Self::Parameters),
            Self::Parameters => Some(Self::Preview),
            Self::Preview => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Saturates at the first step.
    #[must_use]
    pub const fn preceding(self) -> Self {
        match self {
            Self::Template | Self::Details => Self::Template,
            Self::Parameters => Self::Details,
            Self::Preview => Self::Parameters,
            Self::Done => Self::Preview,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Template => "Choose a template",
            Self::Details => "Service details",
            Self::Parameters => "Template parameters",
            Self::Preview => "Preview",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.index() + 1, Self::ALL.len(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn preceding_never_goes_below_first() {
        assert_eq!(WizardStep::Template.preceding(), WizardStep::Template);
        assert_eq!(WizardStep::Done.preceding(), WizardStep::Preview);
    }

    #[test]
    fn following_stops_at_done() {
        assert_eq!(WizardStep::Preview.following(), Some(WizardStep::Done));
        assert_eq!(WizardStep::Done.following(), None);
    }

    #[test]
    fn display_shows_position() {
        assert_eq!(WizardStep::Parameters.to_string(), "3/5 Template parameters");
    }
}
