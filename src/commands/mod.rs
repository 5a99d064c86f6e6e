pub mod bugs;
pub mod docs;
pub mod form;
pub mod ipc;
pub mod settings;
pub mod view;
