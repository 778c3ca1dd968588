pub mod contact_form;
pub mod faq;
pub mod language;
pub mod particle_field;
pub mod quick_launcher;
pub mod stats_bar;
pub mod tilt_card;
