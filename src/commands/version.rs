use anyhow::Result;

pub fn cmd_version(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "version",
            "command": "version",
            "version": version,
        }))?;
    } else {
        println!("dashctl {}", version);
    }

    Ok(())
}
