const BANNER: &str = r#"
      _             _                              _
  ___| |_ ___   ___| | __    ___  ___ _ ____   __(_) ___ ___
 / __| __/ _ \ / __| |/ /   / __|/ _ \ '__\ \ / /| |/ __/ _ \
 \__ \ || (_) | (__|   <    \__ \  __/ |   \ V / | | (_|  __/
 |___/\__\___/ \___|_|\_\   |___/\___|_|    \_/  |_|\___\___|
"#;

pub fn print_banner() {
    println!("{}", BANNER);
    println!("  stock-service v{}\n", env!("CARGO_PKG_VERSION"));
}
