use anyhow::Context;

/// The domain crate stays free of UI and runtime crates.
const DOMAIN_PACKAGE: &str = "monsterdex-domain";
const FORBIDDEN_IN_DOMAIN: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tracing-subscriber",
    "monsterdex-player",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = domain_violations(&metadata)?;

    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_PACKAGE} must not depend on: {}",
            violations.join(", ")
        )
    }

    println!("arch-check: {DOMAIN_PACKAGE} dependencies OK");
    Ok(())
}

fn domain_violations(metadata: &serde_json::Value) -> anyhow::Result<Vec<String>> {
    let packages = metadata["packages"]
        .as_array()
        .context("cargo metadata has no packages")?;
    let domain = packages
        .iter()
        .find(|p| p["name"] == DOMAIN_PACKAGE)
        .with_context(|| format!("{DOMAIN_PACKAGE} not found in workspace"))?;

    let violations = domain["dependencies"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|dep| dep["name"].as_str())
        .filter(|name| FORBIDDEN_IN_DOMAIN.contains(name))
        .map(str::to_string)
        .collect();
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(domain_deps: &[&str]) -> serde_json::Value {
        let deps: Vec<serde_json::Value> = domain_deps
            .iter()
            .map(|name| serde_json::json!({ "name": name }))
            .collect();
        serde_json::json!({
            "packages": [
                { "name": "monsterdex-player", "dependencies": [{ "name": "dioxus" }] },
                { "name": DOMAIN_PACKAGE, "dependencies": deps },
            ]
        })
    }

    #[test]
    fn clean_domain_passes() {
        let violations = domain_violations(&metadata(&["uuid", "serde", "thiserror"])).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn ui_dependency_flagged() {
        let violations = domain_violations(&metadata(&["uuid", "dioxus"])).unwrap();
        assert_eq!(violations, vec!["dioxus".to_string()]);
    }

    #[test]
    fn missing_domain_is_an_error() {
        let metadata = serde_json::json!({ "packages": [] });
        assert!(domain_violations(&metadata).is_err());
    }
}
