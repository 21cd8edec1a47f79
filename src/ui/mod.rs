/// UI module exports
pub mod components;
pub mod flows;
pub mod popup;
pub mod state;
