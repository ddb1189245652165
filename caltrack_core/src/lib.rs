//! Core logic for the calorie tracker: the activity data model, the entry
//! form's state machine, and the reducer-style store that owns the
//! authoritative list of activities.
//!
//! Rendering is deliberately absent. A host UI consumes
//! [`form::ActivityForm`] for its controlled inputs, forwards input events to
//! [`form::ActivityForm::set_field`], and hands submissions to whatever
//! implements [`form::ActivityDispatch`] (typically [`store::ActivityState`]).

pub mod data;
pub mod form;
pub mod store;
