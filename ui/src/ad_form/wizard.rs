//! Section navigation for the multi-step creation form.

use payloads::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardSection {
    Basic,
    Details,
    Amenities,
    Images,
}

impl WizardSection {
    pub const ALL: [WizardSection; 4] =
        [Self::Basic, Self::Details, Self::Amenities, Self::Images];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basics",
            Self::Details => "Details",
            Self::Amenities => "Amenities",
            Self::Images => "Images",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Field path prefixes edited in this section.
    pub fn field_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &["title", "description", "rentalType"],
            Self::Details => &[
                "property.type",
                "property.price",
                "property.capacity",
                "property.address",
                "property.livingArea",
            ],
            Self::Amenities => &["property.amenities"],
            Self::Images => &[],
        }
    }

    pub fn errors(self, errors: &FieldErrors) -> FieldErrors {
        errors.under(self.field_prefixes())
    }
}

/// Whether moving forward requires the sections left behind to be valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GatePolicy {
    /// Any section can be reached at any time; errors surface on submit.
    #[default]
    Deferred,
    /// Forward moves stop at the first section that still has errors.
    BlockInvalid,
}

/// A refused forward move.
#[derive(Debug, Clone, PartialEq)]
pub struct Blocked {
    pub section: WizardSection,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    active: WizardSection,
    policy: GatePolicy,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(GatePolicy::default())
    }
}

impl Wizard {
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            active: WizardSection::Basic,
            policy,
        }
    }

    pub fn active(&self) -> WizardSection {
        self.active
    }

    /// Jump to `target`. Backward moves always succeed.
    pub fn select(
        &mut self,
        target: WizardSection,
        errors: &FieldErrors,
    ) -> Result<WizardSection, Blocked> {
        if self.policy == GatePolicy::BlockInvalid && target > self.active {
            let skipped = &WizardSection::ALL[self.active.index()..target.index()];
            for section in skipped {
                let section_errors = section.errors(errors);
                if !section_errors.is_empty() {
                    return Err(Blocked {
                        section: *section,
                        errors: section_errors,
                    });
                }
            }
        }
        self.active = target;
        Ok(self.active)
    }

    /// Advance one section; staying on the last one is not an error.
    pub fn next(&mut self, errors: &FieldErrors) -> Result<WizardSection, Blocked> {
        match self.active.next() {
            Some(target) => self.select(target, errors),
            None => Ok(self.active),
        }
    }

    pub fn previous(&mut self) -> WizardSection {
        if let Some(target) = self.active.previous() {
            self.active = target;
        }
        self.active
    }

    /// Show the first section holding an error, if any.
    pub fn focus_first_invalid(&mut self, errors: &FieldErrors) -> Option<WizardSection> {
        let section = WizardSection::ALL
            .into_iter()
            .find(|section| !section.errors(errors).is_empty())?;
        self.active = section;
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::schema;

    fn fresh_errors() -> FieldErrors {
        schema::validate(&schema::initial_candidate()).unwrap_err()
    }

    #[test]
    fn starts_on_basic() {
        assert_eq!(Wizard::default().active(), WizardSection::Basic);
    }

    #[test]
    fn deferred_policy_allows_jumping_past_incomplete_sections() {
        let mut wizard = Wizard::default();
        let errors = fresh_errors();
        assert!(!WizardSection::Details.errors(&errors).is_empty());

        assert_eq!(
            wizard.select(WizardSection::Images, &errors),
            Ok(WizardSection::Images)
        );
        assert_eq!(wizard.active(), WizardSection::Images);
    }

    #[test]
    fn next_and_previous_walk_in_order() {
        let mut wizard = Wizard::default();
        let errors = fresh_errors();
        for expected in [
            WizardSection::Details,
            WizardSection::Amenities,
            WizardSection::Images,
            WizardSection::Images,
        ] {
            assert_eq!(wizard.next(&errors), Ok(expected));
        }
        assert_eq!(wizard.previous(), WizardSection::Amenities);
        wizard.select(WizardSection::Basic, &errors).unwrap();
        assert_eq!(wizard.previous(), WizardSection::Basic);
    }

    #[test]
    fn blocking_policy_stops_at_first_invalid_section() {
        let mut wizard = Wizard::new(GatePolicy::BlockInvalid);
        let errors = fresh_errors();

        let blocked = wizard.select(WizardSection::Images, &errors).unwrap_err();
        assert_eq!(blocked.section, WizardSection::Basic);
        assert!(blocked.errors.contains("title"));
        assert!(!blocked.errors.contains("property.type"));
        assert_eq!(wizard.active(), WizardSection::Basic);
    }

    #[test]
    fn blocking_policy_only_checks_sections_left_behind() {
        let mut wizard = Wizard::new(GatePolicy::BlockInvalid);
        let errors = fresh_errors().under(&["property.capacity"]);

        assert_eq!(wizard.next(&errors), Ok(WizardSection::Details));
        let blocked = wizard.next(&errors).unwrap_err();
        assert_eq!(blocked.section, WizardSection::Details);

        // Going back is always allowed.
        assert_eq!(
            wizard.select(WizardSection::Basic, &errors),
            Ok(WizardSection::Basic)
        );
    }

    #[test]
    fn focus_first_invalid_picks_earliest_section() {
        let mut wizard = Wizard::default();
        let errors = fresh_errors().under(&["property.address"]);
        wizard.select(WizardSection::Images, &errors).unwrap();

        assert_eq!(
            wizard.focus_first_invalid(&errors),
            Some(WizardSection::Details)
        );
        assert_eq!(wizard.focus_first_invalid(&FieldErrors::new()), None);
        assert_eq!(wizard.active(), WizardSection::Details);
    }
}
