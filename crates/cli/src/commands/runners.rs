use anyhow::Result;
use tagrunner_core::TestRunner;

pub fn runners_command(runner: &TestRunner) -> Result<()> {
    for name in runner.config().runner_names() {
        let marker = if name == runner.runner() { "*" } else { " " };
        println!("{marker} {name}");
    }
    Ok(())
}
