//! Eventing - Dashboard Events and Effects

pub mod dashboard_event;
