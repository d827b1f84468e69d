//! Headless host example.
//!
//! Drives a control the way an embedding page would: decode the host's
//! configuration payload, mount, forward a pointer sequence and a few
//! clicks, flip the colour scheme and unmount. Every message the control
//! sends back is printed.
//!
//! Run with: cargo run -p carbon-button --example headless_host
//! Set `RUST_LOG=carbon_button=trace` to see the controller's logging.

use carbon_button::prelude::*;

/// Prints every report the control sends to its host.
struct ConsoleChannel;

impl HostChannel for ConsoleChannel {
    fn report_value(&mut self, value: u64) -> Result<(), ChannelError> {
        println!("host <- value {value}");
        Ok(())
    }

    fn report_frame_height(&mut self, height: f32) -> Result<(), ChannelError> {
        println!("host <- frame height {height}px");
        Ok(())
    }
}

/// Prints what a real surface would draw.
struct ConsoleSurface {
    height: f32,
}

impl ControlSurface for ConsoleSurface {
    fn render(&mut self, view: &ControlView) {
        match view {
            ControlView::Loading(loading) => {
                self.height = 38.0;
                println!("render  {}", loading.text);
            }
            ControlView::Button(button) => {
                self.height = if button.icon.is_some() { 44.0 } else { 40.0 };
                println!(
                    "render  <button class=\"{}\" aria-label={:?}> {}",
                    button.class_name(),
                    button.aria_label,
                    button.label.as_deref().unwrap_or_default()
                );
                println!("        style=\"{}\"", button.inline_css());
            }
        }
    }

    fn apply_style(&mut self, snapshot: &StyleSnapshot) {
        let declarations: Vec<_> = snapshot
            .css_declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        println!("style   {}", declarations.join("; "));
    }

    fn rendered_height(&self) -> f32 {
        self.height
    }
}

const PAYLOAD: &str = r##"{
    "label": "Deploy",
    "icon": "<svg viewBox=\"0 0 32 32\"><path d=\"M16 4l12 12H20v12h-8V16H4z\"/></svg>",
    "buttonType": "secondary",
    "colors": { "hover_bg": "#491d8b", "hover_text": "#ffffff" },
    "isDefault": true,
    "default": 2
}"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Configuration::from_json(PAYLOAD)?;
    let environment = MediaQuery::new(false);
    let styles = StyleRegistry::new();

    let controller = InteractionController::new(ConsoleChannel, ConsoleSurface { height: 0.0 })
        .with_color_scheme(environment.clone())
        .with_style_registry(styles.clone());

    println!("-- mount");
    controller.on_mount(Some(config.clone()));

    println!("-- click twice");
    for event in [PointerEvent::Enter, PointerEvent::Down, PointerEvent::Up] {
        controller.on_pointer(event);
    }
    controller.on_activate();
    controller.on_pointer_down();
    controller.on_pointer_up();
    controller.on_activate();
    controller.on_pointer_leave();

    println!("-- environment switches to dark");
    environment.set_prefers_dark(true);

    println!("-- host disables the control");
    controller.on_configuration_changed(Some(config.with_disabled(true)));
    controller.on_activate();

    println!("-- unmount");
    controller.on_unmount();

    println!(
        "final count {}, {} document stylesheet(s), {} scheme listener(s)",
        controller.click_count(),
        styles.len(),
        environment.listener_count()
    );
    Ok(())
}
