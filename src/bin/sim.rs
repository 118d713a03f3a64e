use battleship_duel::{seeded_rng, MatchRunner, MatchState, RunConfig, Seat};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = seeded_rng(Some(seed));
    let state = MatchState::generate(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut runner = MatchRunner::new(state, rng, RunConfig::unpaced());
    let winner = runner.run().await?;

    let state = runner.state();
    let winner = match winner {
        Seat::Parent => "parent",
        Seat::Child => "child",
    };
    let result = json!({
        "winner": winner,
        "turns": state.turns(),
        "parent_remaining": state.fleet(Seat::Parent).remaining(),
        "child_remaining": state.fleet(Seat::Child).remaining(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
