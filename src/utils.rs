use std::path::MAIN_SEPARATOR_STR;

use console::Style;

/// # `MessageType`
/// Trait for operator-facing message types.
trait MessageType {
    /// The label prefix for each message type (e.g., "ERROR")
    const LABEL: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;

    /// The terminal style applied to the label.
    fn style() -> Style;
}

// Define the message types
struct ErrorMessage;
struct SuccessMessage;
struct InfoMessage;

// Implement the MessageType trait for each type
impl MessageType for ErrorMessage {
    const LABEL: &'static str = "ERROR";
    const TO_STDERR: bool = true;

    fn style() -> Style {
        Style::new().red().bold()
    }
}

impl MessageType for SuccessMessage {
    const LABEL: &'static str = "SUCCESS";

    fn style() -> Style {
        Style::new().green().bold()
    }
}

impl MessageType for InfoMessage {
    const LABEL: &'static str = "INFO";

    fn style() -> Style {
        Style::new().cyan()
    }
}

/// # `print_message`
/// Prints a labeled message to the stream the type targets.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message.
fn print_message<T: MessageType>(title: &str, details: &str) {
    let label = T::style().apply_to(T::LABEL);
    let message = if details.is_empty() {
        format!("{label}: {title}")
    } else {
        format!("{label}: {title}\n\n{details}")
    };

    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
pub fn print_error(title: &str, details: &str) {
    print_message::<ErrorMessage>(title, details);
}

/// # `print_success`
/// Prints a success message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the success message.
/// - `details`: The details of the success message.
pub fn print_success(title: &str, details: &str) {
    print_message::<SuccessMessage>(title, details);
}

/// # `print_info`
/// Prints an informational message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the informational message.
/// - `details`: The details of the informational message.
pub fn print_info(title: &str, details: &str) {
    print_message::<InfoMessage>(title, details);
}

/// # `to_os_path`
/// Converts a `/`-separated location from the configuration into the host
/// operating system's path convention for display and directory changes.
#[must_use]
pub fn to_os_path(raw: &str) -> String {
    raw.replace('/', MAIN_SEPARATOR_STR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_os_path_uses_the_host_separator() {
        let expected = ["apps", "frontend", "AngularApp"].join(MAIN_SEPARATOR_STR);
        assert_eq!(to_os_path("apps/frontend/AngularApp"), expected);
    }

    #[test]
    fn to_os_path_leaves_dot_alone() {
        assert_eq!(to_os_path("."), ".");
    }
}
