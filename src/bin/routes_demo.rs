use checkup_portal::domain::*;
use checkup_portal::domain_model::Resolution;

fn main() -> anyhow::Result<()> {
    let table = portal_table()?;
    for route in table.routes() {
        println!(
            "{:<36} {:<12} {}",
            route.path,
            route.section.as_deref().unwrap_or("-"),
            route.name.as_deref().unwrap_or("")
        );
    }

    for path in ["/", "/manager/doctor", "/manager", "/nonexistent"] {
        match table.resolve(path) {
            Resolution::Matched(route) => println!("{path} => view {}", route.view),
            Resolution::Redirect { to, .. } => println!("{path} => redirect {to}"),
            Resolution::NotFound { .. } => println!("{path} => not found"),
        }
    }
    Ok(())
}
