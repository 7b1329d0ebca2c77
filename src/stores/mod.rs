// Panel state
// Component-local; nothing here is persisted

pub mod reminder_settings;
