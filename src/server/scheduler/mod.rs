pub mod registration_completion;
