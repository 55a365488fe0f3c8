mod form_controller;
#[cfg(test)]
mod tests;

pub use form_controller::FormController;
