use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_portal_core::{
    events::{ActionEvent, NotificationEvent, StatusEvent},
    types::{Indicator, NotificationPhase, Severity},
    App, DialogOutput, TimerOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<StatusEvent>()?;
    gen.register_type::<NotificationEvent>()?;
    gen.register_type::<ActionEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<Indicator>()?;
    gen.register_type::<NotificationPhase>()?;
    gen.register_type::<Severity>()?;
    gen.register_type::<TimerOutput>()?;
    gen.register_type::<DialogOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
