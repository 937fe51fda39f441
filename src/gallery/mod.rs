//! Demo pages for the tilt runtime

mod card;
mod page;
mod presets;
mod sandbox;

pub use page::Gallery;
pub use sandbox::Sandbox;

/// Page chrome plus the card structure the runtime expects:
/// `preserve-3d` on the card, a hidden absolutely-positioned shine layer.
pub const STYLESHEET: &str = r#"
.tilt-page {
    min-height: 100vh;
    background: #0f0f1a;
    padding: 32px 24px;
    font-family: system-ui, -apple-system, sans-serif;
    display: flex;
    flex-direction: column;
    gap: 24px;
}
.tilt-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 32px;
    perspective: 1000px;
}
.tilt-card {
    position: relative;
    min-height: 300px;
    border-radius: 14px;
    overflow: hidden;
    transform-style: preserve-3d;
    color: white;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}
.tilt-shine {
    position: absolute;
    inset: 0;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s;
}
.tilt-card-inner,
.tilt-card-body {
    padding: 28px 24px;
    transform-style: preserve-3d;
}
.tilt-card-inner {
    transition: transform 0.3s;
}
.tilt-card h3 {
    margin: 0 0 8px 0;
    font-size: 22px;
}
.tilt-card p {
    margin: 0;
    font-size: 13px;
    opacity: 0.85;
    font-family: monospace;
}
.tilt-button {
    padding: 8px 18px;
    border: none;
    border-radius: 6px;
    background: #4f46e5;
    color: white;
    font-size: 13px;
    font-weight: 600;
    cursor: pointer;
}
.tilt-controls {
    display: flex;
    flex-wrap: wrap;
    gap: 12px 20px;
    align-items: center;
    color: #e5e7eb;
    font-size: 13px;
    font-family: monospace;
}
.tilt-readout {
    background: #1a1a2e;
    border: 1px solid #2a2a4a;
    border-radius: 10px;
    padding: 16px;
    color: #9ca3af;
    font-size: 12px;
    font-family: monospace;
    max-width: 420px;
}
"#;
