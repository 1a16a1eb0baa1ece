pub fn greet(name: Option<&str>) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("World");
    format!("Hello, {name}!")
}
