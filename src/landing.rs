use dioxus::prelude::*;
use crate::Route;
use crate::tilt::TiltConfig;
use crate::tilt::config::{GLARE_ATTR, MAX_TILT_ATTR, REVERSE_ATTR, SCALE_ATTR, SPEED_ATTR};

/// One row of the markup reference: attribute, what it does, default value
fn attribute_rows(defaults: &TiltConfig) -> [(&'static str, &'static str, String); 5] {
    [
        (MAX_TILT_ATTR, "full tilt range in degrees", format!("{}", defaults.max_tilt)),
        (SPEED_ATTR, "transition length in ms", format!("{}", defaults.speed_ms)),
        (SCALE_ATTR, "scale while hovered", format!("{}", defaults.scale.value())),
        (GLARE_ATTR, "\"true\" lights the .tilt-shine child", format!("{}", defaults.glare)),
        (REVERSE_ATTR, "\"true\" tilts away from the pointer", format!("{}", defaults.reverse)),
    ]
}

/// Hover lifecycle as shown on the landing page
const LIFECYCLE: &[(&str, &str)] = &[
    ("enter", "measure the card, set will-change"),
    ("move", "rotate toward the pointer, fire tiltChange"),
    ("leave", "ease back to flat over the transition"),
    ("relax", "will-change drops to auto once it settles"),
];

#[component]
pub fn Landing() -> Element {
    let rows = attribute_rows(&TiltConfig::default());

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Tilt Playground"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Cards that lean toward the pointer. Mark any element with data-tilt and it picks up perspective rotation, glare, shadow and parallax."
                }
                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::Gallery {},
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #22c55e, #16a34a); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                        "Gallery \u{2192}"
                    }
                    Link {
                        to: Route::Sandbox {},
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                        "Sandbox \u{2192}"
                    }
                }
            }

            div {
                style: "display: flex; gap: 40px; max-width: 880px; margin-top: 64px; align-items: flex-start; font-family: monospace; font-size: 13px;",

                // Markup reference
                table {
                    style: "border-collapse: collapse; color: #9ca3af; flex: 3;",
                    tr {
                        th { style: "text-align: left; color: #e5e7eb; padding: 6px 12px 6px 0;", "attribute" }
                        th { style: "text-align: left; color: #e5e7eb; padding: 6px 12px 6px 0;", "effect" }
                        th { style: "text-align: left; color: #e5e7eb; padding: 6px 0;", "default" }
                    }
                    for (name, effect, default) in rows {
                        tr {
                            key: "{name}",
                            style: "border-top: 1px solid #2a2a4a;",
                            td { style: "padding: 6px 12px 6px 0; color: #93c5fd;", "{name}" }
                            td { style: "padding: 6px 12px 6px 0;", "{effect}" }
                            td { style: "padding: 6px 0;", "{default}" }
                        }
                    }
                }

                // Lifecycle
                ol {
                    style: "margin: 0; padding-left: 20px; color: #9ca3af; flex: 2; line-height: 1.9;",
                    for (step, what) in LIFECYCLE.iter() {
                        li {
                            key: "{step}",
                            span { style: "color: #e5e7eb;", "{step}" }
                            " \u{b7} {what}"
                        }
                    }
                }
            }

            p {
                style: "color: #4b5563; font-size: 13px; margin-top: 64px;",
                "Attributes win over page options. Hover, leave, resize: nothing else to wire up."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults_match_config() {
        let rows = attribute_rows(&TiltConfig::default());
        let defaults: Vec<&str> = rows.iter().map(|(_, _, d)| d.as_str()).collect();
        assert_eq!(defaults, ["15", "300", "1", "false", "false"]);
    }

    #[test]
    fn reference_rows_read_back_as_config() {
        let custom = TiltConfig::default().with_max_tilt(25.0).with_glare(true).with_speed(500);
        let rows = attribute_rows(&custom);
        let read = TiltConfig::default()
            .with_attributes(|name| rows.iter().find(|(k, _, _)| *k == name).map(|(_, _, v)| v.clone()));
        assert_eq!(read, custom);
    }

    #[test]
    fn lifecycle_relax_keeps_the_transition() {
        let relax = LIFECYCLE.iter().find(|(step, _)| *step == "relax").map(|(_, what)| *what).unwrap();
        assert!(relax.contains("will-change"));
        assert!(!relax.contains("transition"));
    }
}
