pub fn run() -> anyhow::Result<()> {
    println!("feedwatch {}", env!("CARGO_PKG_VERSION"));
    println!("Forwards new community feed activity, once per event");
    Ok(())
}
