//! Input widgets: numeric fields, stepper, regex-gated text, hex field.

use std::rc::Rc;

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use regex::Regex;

use crate::constants;

/// Shared styling for the small monospace text fields.
fn text_field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

/// A numeric input that maps a normalized 0.0–1.0 signal to a display range.
///
/// For example, hue maps 0.0–1.0 → 0–360, saturation maps 0.0–1.0 → 0–100.
pub fn number_input(
    lbl: &'static str,
    signal: RwSignal<f64>,
    max_display: f64,
) -> impl IntoView {
    let text = RwSignal::new(format_value(signal.get_untracked(), max_display));

    // Signal → text (external updates)
    create_effect(move |_| {
        let val = signal.get();
        let display = (val * max_display).round();
        let current = text.get_untracked();
        let expected = format!("{}", display as i64);
        if current != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        if let Ok(num) = raw.parse::<f64>() {
            let clamped = num.clamp(0.0, max_display);
            let new_display = clamped.round() as i64;
            let old_display = (signal.get_untracked() * max_display).round() as i64;
            if new_display != old_display {
                signal.set(clamped / max_display);
            }
            let formatted = format!("{}", new_display);
            if raw != formatted {
                text.set(formatted);
            }
        } else {
            // Reset to current signal value
            let formatted = format!("{}", (signal.get_untracked() * max_display).round() as i64);
            if raw != formatted {
                text.set(formatted);
            }
        }
    };

    let on_commit_clone = on_commit;

    v_stack((
        text_input(text)
            .style(|s| text_field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

fn format_value(normalized: f64, max: f64) -> String {
    let display = (normalized * max).round() as i64;
    format!("{}", display)
}

/// A numeric input with a range and +/- step buttons.
///
/// The field commits on Enter or focus loss; committed and stepped values are
/// clamped to `min..=max`.
// TODO: press-and-hold auto-repeat on the step buttons needs a timer hook.
pub fn stepper_input(value: RwSignal<f64>, min: f64, max: f64, step: f64) -> impl IntoView {
    let text = RwSignal::new(format_number(value.get_untracked()));

    // Signal → text (external updates)
    create_effect(move |_| {
        let val = value.get();
        let expected = format_number(val);
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        if let Ok(num) = raw.trim().parse::<f64>() {
            let clamped = num.clamp(min, max);
            if clamped != value.get_untracked() {
                value.set(clamped);
            }
            let formatted = format_number(clamped);
            if raw != formatted {
                text.set(formatted);
            }
        } else {
            let formatted = format_number(value.get_untracked());
            if raw != formatted {
                text.set(formatted);
            }
        }
    };
    let on_commit_clone = on_commit;

    let step_by = move |direction: f64| {
        let next = (value.get_untracked() + direction * step).clamp(min, max);
        if next != value.get_untracked() {
            value.set(next);
        }
    };

    h_stack((
        step_button("-", move || step_by(-1.0)),
        text_input(text)
            .style(|s| text_field_style(s, constants::INPUT_WIDTH + 8.0))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        step_button("+", move || step_by(1.0)),
    ))
    .style(|s| s.items_center().gap(2.0))
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

fn step_button(glyph: &'static str, on_press: impl Fn() + 'static) -> impl IntoView {
    container(label(move || glyph).style(|s| {
        s.font_size(constants::INPUT_FONT)
            .font_family("monospace".to_string())
            .color(Color::rgb8(120, 120, 120))
    }))
    .style(|s| {
        s.size(14.0, 14.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        on_press();
    })
}

/// A free-text input gated by regular expressions.
///
/// `valid` decides whether a commit (Enter or focus loss) is accepted; a
/// rejected commit restores the last committed value. `completion`, when
/// given, filters every keystroke: edits that stop matching it are rolled
/// back immediately, so the buffer only ever holds prefixes of a valid value.
pub fn regex_input(
    value: RwSignal<String>,
    valid: Regex,
    completion: Option<Regex>,
) -> impl IntoView {
    let text = RwSignal::new(value.get_untracked());
    let last_accepted = RwSignal::new(value.get_untracked());

    // External value → text
    create_effect(move |_| {
        let val = value.get();
        if text.get_untracked() != val {
            text.set(val.clone());
        }
        last_accepted.set(val);
    });

    // Keystroke gate: roll back edits the completion regex rejects.
    create_effect(move |_| {
        let raw = text.get();
        let gate = match completion {
            Some(ref completion) => raw.is_empty() || completion.is_match(&raw),
            None => true,
        };
        if gate {
            if last_accepted.get_untracked() != raw {
                last_accepted.set(raw);
            }
        } else {
            text.set(last_accepted.get_untracked());
        }
    });

    let on_commit = Rc::new(move || {
        let raw = text.get_untracked();
        if valid.is_match(&raw) {
            if value.get_untracked() != raw {
                value.set(raw);
            }
        } else {
            log::debug!("regex input rejected commit: {raw:?}");
            let restored = value.get_untracked();
            if raw != restored {
                text.set(restored.clone());
            }
            last_accepted.set(restored);
        }
    });
    let on_commit_key = on_commit.clone();

    text_input(text)
        .style(|s| text_field_style(s, constants::HEX_INPUT_WIDTH))
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit_key();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}

/// A hex input field that syncs bidirectionally with an `RwSignal<String>`.
///
/// `hex_signal` carries lowercase digits without the `#` prefix. Valid hex is
/// propagated on every keystroke; a malformed commit restores the current
/// value instead of erroring.
pub(crate) fn hex_input(hex_signal: RwSignal<String>) -> impl IntoView {
    let text = RwSignal::new(hex_signal.get_untracked());

    // External hex_signal → text (only update if not equivalent)
    create_effect(move |_| {
        let val = hex_signal.get();
        let current = text.get_untracked();
        let current_normalized = current.trim_start_matches('#').to_lowercase();
        if current_normalized != val {
            text.set(val);
        }
    });

    // Dynamic: text → hex_signal on every valid keystroke
    create_effect(move |_| {
        let raw = text.get();
        let trimmed = raw.trim_start_matches('#');
        if (trimmed.len() == 6 || trimmed.len() == 8)
            && trimmed.chars().all(|c| c.is_ascii_hexdigit())
        {
            let lower = trimmed.to_lowercase();
            if hex_signal.get_untracked() != lower {
                hex_signal.set(lower);
            }
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let trimmed = raw.trim().trim_start_matches('#');
        let is_valid = (trimmed.len() == 6 || trimmed.len() == 8)
            && trimmed.chars().all(|c| c.is_ascii_hexdigit());
        if is_valid {
            let lower = trimmed.to_lowercase();
            if raw != lower {
                text.set(lower.clone());
            }
            if hex_signal.get_untracked() != lower {
                hex_signal.set(lower);
            }
        } else {
            log::debug!("hex input rejected commit: {raw:?}");
            let restored = hex_signal.get_untracked();
            if raw != restored {
                text.set(restored);
            }
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| text_field_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event_stop(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                    }
                }
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// An editable percentage input for alpha (0–100%).
///
/// Shows a numeric text field with a `%` label to its right. The user types
/// a plain number; it is committed on Enter or focus-lost and clamped to 0–100.
#[cfg(feature = "alpha")]
pub(crate) fn alpha_input(signal: RwSignal<f64>) -> impl IntoView {
    let text = RwSignal::new(format!(
        "{}",
        (signal.get_untracked() * 100.0).round() as i64
    ));

    // Signal → text
    create_effect(move |_| {
        let val = signal.get();
        let display = format!("{}", (val * 100.0).round() as i64);
        if text.get_untracked() != display {
            text.set(display);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        if let Ok(num) = raw.trim().parse::<f64>() {
            let clamped = num.clamp(0.0, 100.0);
            let new_display = clamped.round() as i64;
            let old_display = (signal.get_untracked() * 100.0).round() as i64;
            if new_display != old_display {
                signal.set(clamped / 100.0);
            }
            let formatted = format!("{}", new_display);
            if raw.trim() != formatted {
                text.set(formatted);
            }
        } else {
            let formatted = format!("{}", (signal.get_untracked() * 100.0).round() as i64);
            if raw != formatted {
                text.set(formatted);
            }
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        text_input(text)
            .style(|s| text_field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        label(|| "%").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("clipboard write failed: {err}");
            }
        }
        Err(err) => {
            log::warn!("clipboard unavailable: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_number, format_value};

    #[test]
    fn format_value_scales_and_rounds() {
        assert_eq!(format_value(0.5, 360.0), "180");
        assert_eq!(format_value(1.0, 100.0), "100");
        assert_eq!(format_value(0.0, 255.0), "0");
    }

    #[test]
    fn format_number_trims_integers() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(2.5), "2.50");
        assert_eq!(format_number(-1.0), "-1");
    }
}
