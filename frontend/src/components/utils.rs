use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("Alert suppressed: {}", message);
            }
        }
        None => log::warn!("No window for alert: {}", message),
    }
}

pub fn bar_width(fill_percent: f64) -> String {
    format!("width: {}%", fill_percent)
}

pub fn hidden_unless(visible: bool) -> &'static str {
    if visible { "" } else { "display: none;" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_uses_raw_percentage() {
        assert_eq!(bar_width(42.0), "width: 42%");
        assert_eq!(bar_width(87.5), "width: 87.5%");
    }

    #[test]
    fn hidden_style() {
        assert_eq!(hidden_unless(true), "");
        assert_eq!(hidden_unless(false), "display: none;");
    }
}
