pub mod add_event;
