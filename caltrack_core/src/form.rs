use std::str::FromStr;

use thiserror::Error;

use crate::data::activity::{Activity, ActivityId};
use crate::data::category::CategoryId;

/// Identifies one of the form's input controls.
///
/// Hosts address controls by the string IDs their widgets carry; `FromStr`
/// accepts exactly those. The draft is a closed record, so an identifier
/// outside this set has no slot to land in and is rejected at parse time.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Field {
    Category,
    Name,
    Calories,
}

/// Error type for field identifiers that name no control of the form.
#[derive(Debug, Error)]
#[error("no form field is named `{0}`")]
pub struct UnknownField(String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Field::Category),
            "name" => Ok(Field::Name),
            "calories" => Ok(Field::Calories),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// The one-method seam between the form and whoever owns the saved list.
///
/// The form emits each submitted entry through `save` and never inspects a
/// result; acceptance, storage, and ordering are entirely the implementor's
/// business.
pub trait ActivityDispatch {
    fn save(&mut self, new_activity: Activity);
}

/// Applies one field edit to a draft, returning the updated copy.
///
/// This is pure and non-destructive: the result differs from `draft` in the
/// targeted field only. Raw text for the numeric fields is parsed before
/// storage. An unparseable calorie count becomes 0 (the value a number input
/// hands over when its content is not a number), which keeps the draft
/// invalid; an unparseable category code leaves the current selection in
/// place, since the select can only ever produce known codes.
pub fn edit_field(draft: &Activity, field: Field, raw: &str) -> Activity {
    let mut edited = draft.clone();
    match field {
        Field::Category => {
            if let Ok(code) = raw.trim().parse::<i32>() {
                edited.category = CategoryId::new(code);
            }
        }
        Field::Name => {
            edited.name = raw.to_string();
        }
        Field::Calories => {
            edited.calories = raw.trim().parse().unwrap_or(0);
        }
    }
    edited
}

/// The form's state: a single in-progress activity, the source of truth for
/// the host's controlled inputs.
#[derive(Debug)]
pub struct ActivityForm {
    draft: Activity,
}

impl ActivityForm {
    /// Creates a form holding a blank draft.
    pub fn new() -> Self {
        ActivityForm { draft: Activity::draft() }
    }

    /// The current draft, for mirroring into the host's input widgets.
    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    /// Records one field edit coming in from an input widget.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        self.draft = edit_field(&self.draft, field, raw);
    }

    /// Whether the submit affordance should be enabled. This gates nothing
    /// else; [`submit`](Self::submit) itself does not re-check it.
    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// Label for the submit control, following the selected category.
    pub fn submit_label(&self) -> &'static str {
        if self.draft.category == CategoryId::FOOD {
            "Guardar comida"
        } else {
            "Guardar ejercicio"
        }
    }

    /// Hands the draft off to the dispatcher and resets the form to a blank
    /// draft under a fresh ID.
    ///
    /// No validity check happens here. The host keeps the affordance
    /// disabled while [`is_valid`](Self::is_valid) is false, so this path is
    /// normally unreachable for invalid drafts, but a programmatic call will
    /// dispatch whatever the draft holds.
    pub fn submit(&mut self, dispatch: &mut dyn ActivityDispatch) {
        let submitted = std::mem::replace(&mut self.draft, Activity::draft());
        log::debug!("dispatching save for activity {:?}", submitted.id);
        dispatch.save(submitted);
    }

    /// Discards the draft in favor of a blank one with a fresh ID.
    pub fn reset(&mut self) {
        self.draft = Activity::draft();
    }

    /// Host callback for when the externally tracked active selection
    /// changes. Must be invoked only on a change of the selection ID itself,
    /// not on every change of `activities`.
    ///
    /// When the new selection names an entry in `activities` the whole draft
    /// is replaced by it, ID included, putting the form into edit-in-place
    /// mode. A selection that matches nothing leaves the draft alone.
    pub fn on_active_changed(
        &mut self,
        active_id: Option<ActivityId>,
        activities: &[Activity],
    ) {
        let Some(active_id) = active_id else {
            return;
        };
        match activities.iter().find(|activity| activity.id == active_id) {
            Some(selected) => self.draft = selected.clone(),
            None => {
                log::warn!(
                    "active id {:?} not found in {} activities; keeping draft",
                    active_id,
                    activities.len()
                );
            }
        }
    }
}

impl Default for ActivityForm {
    fn default() -> Self {
        ActivityForm::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Test double for the dispatch seam; records every save it is handed.
    #[derive(Default)]
    struct RecordingDispatch {
        saved: Vec<Activity>,
    }

    impl ActivityDispatch for RecordingDispatch {
        fn save(&mut self, new_activity: Activity) {
            self.saved.push(new_activity);
        }
    }

    fn filled_form() -> ActivityForm {
        let mut form = ActivityForm::new();
        form.set_field(Field::Name, "Lunch");
        form.set_field(Field::Calories, "500");
        form
    }

    #[test]
    fn field_ids_parse_to_fields() {
        assert_eq!("category".parse::<Field>().unwrap(), Field::Category);
        assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!("calories".parse::<Field>().unwrap(), Field::Calories);
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn edit_touches_only_the_targeted_field() {
        let draft = Activity::draft();

        let renamed = edit_field(&draft, Field::Name, "Pesas");
        assert_eq!(renamed.name, "Pesas");
        assert_eq!(renamed.id, draft.id);
        assert_eq!(renamed.category, draft.category);
        assert_eq!(renamed.calories, draft.calories);

        let counted = edit_field(&renamed, Field::Calories, "250");
        assert_eq!(counted.calories, 250);
        assert_eq!(counted.name, "Pesas");
        assert_eq!(renamed.calories, 0, "the input draft is left untouched");
    }

    #[test]
    fn numeric_fields_store_numbers_not_text() {
        let draft = Activity::draft();
        let edited = edit_field(&draft, Field::Category, "2");
        assert_eq!(edited.category, CategoryId::new(2));

        let edited = edit_field(&draft, Field::Calories, " 42 ");
        assert_eq!(edited.calories, 42);
    }

    #[test]
    fn garbage_numeric_input_keeps_the_draft_safe() {
        let mut draft = Activity::draft();
        draft.calories = 300;

        // a number input reports "" when its content isn't numeric
        let edited = edit_field(&draft, Field::Calories, "");
        assert_eq!(edited.calories, 0);

        let edited = edit_field(&draft, Field::Category, "Comida");
        assert_eq!(edited.category, draft.category);
    }

    #[test]
    fn validity_gates_the_affordance() {
        let mut form = ActivityForm::new();
        assert!(!form.is_valid());
        form.set_field(Field::Name, "Lunch");
        assert!(!form.is_valid());
        form.set_field(Field::Calories, "1");
        assert!(form.is_valid());
        form.set_field(Field::Name, "   ");
        assert!(!form.is_valid());
    }

    #[test]
    fn submit_label_follows_the_category() {
        let mut form = ActivityForm::new();
        assert_eq!(form.submit_label(), "Guardar comida");
        form.set_field(Field::Category, "2");
        assert_eq!(form.submit_label(), "Guardar ejercicio");
    }

    #[test]
    fn submit_emits_exactly_one_save_equal_to_the_draft() {
        let mut form = filled_form();
        let draft = form.draft().clone();

        let mut dispatch = RecordingDispatch::default();
        form.submit(&mut dispatch);

        assert_eq!(dispatch.saved, vec![draft]);
    }

    #[test]
    fn submit_resets_to_a_blank_draft_with_a_fresh_id() {
        let mut form = filled_form();
        let old_id = form.draft().id;

        form.submit(&mut RecordingDispatch::default());

        let draft = form.draft();
        assert_eq!(draft.category, CategoryId::FOOD);
        assert_eq!(draft.name, "");
        assert_eq!(draft.calories, 0);
        assert_ne!(draft.id, old_id);
    }

    #[test]
    fn reset_discards_the_draft_under_a_fresh_id() {
        let mut form = filled_form();
        let old_id = form.draft().id;

        form.reset();

        assert_eq!(form.draft().name, "");
        assert_eq!(form.draft().calories, 0);
        assert_ne!(form.draft().id, old_id);
    }

    #[test]
    fn submit_performs_no_validity_check() {
        // the guard lives in the UI affordance, not in the handler
        let mut form = ActivityForm::new();
        assert!(!form.is_valid());

        let mut dispatch = RecordingDispatch::default();
        form.submit(&mut dispatch);
        assert_eq!(dispatch.saved.len(), 1);
        assert_eq!(dispatch.saved[0].name, "");
    }

    #[test]
    fn active_selection_loads_the_matching_entry() {
        let mut stored = Activity::draft();
        stored.name = "Ensalada".to_string();
        stored.calories = 120;
        let activities = vec![Activity::draft(), stored.clone()];

        let mut form = filled_form();
        form.on_active_changed(Some(stored.id), &activities);

        assert_eq!(form.draft(), &stored);
    }

    #[test]
    fn missing_selection_leaves_the_draft_unchanged() {
        let mut form = filled_form();
        let before = form.draft().clone();

        form.on_active_changed(Some(ActivityId::random()), &[]);
        assert_eq!(form.draft(), &before);

        form.on_active_changed(None, &[before.clone()]);
        assert_eq!(form.draft(), &before);
    }
}
