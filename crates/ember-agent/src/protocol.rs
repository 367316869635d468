//! Line protocol between the harness and the planner.
//!
//! ```text
//! stdin:  {"turn": 0, "player": 0, "width": 12, ...}    one observation per line
//! stdout: m u_1 e,bw 3 4,dc 5 5                          the turn's commands
//!         D_FINISH                                       end of turn
//! ```
//!
//! A bad observation never stops the game: the error is logged and the turn
//! is answered with an empty command line.

use std::io::{BufRead, Write};

use ember_core::Agent;
use ember_world::{GameState, Observation};
use tracing::{debug, warn};

use crate::error::AgentError;

/// Marks the end of one turn's output.
pub const TURN_END: &str = "D_FINISH";

/// Separator between commands on the output line.
pub const COMMAND_SEPARATOR: &str = ",";

/// Decode and validate one observation line.
pub fn parse_observation(line: &str) -> Result<GameState, AgentError> {
    let obs: Observation = serde_json::from_str(line)?;
    Ok(GameState::from_observation(&obs)?)
}

/// Plan one turn from a raw observation line.
pub fn handle_turn(agent: &Agent, line: &str) -> Result<Vec<String>, AgentError> {
    let state = parse_observation(line)?;
    let plan = agent.act(&state)?;
    Ok(plan.commands())
}

/// Write one turn's commands followed by the end-of-turn marker.
pub fn write_turn<W: Write>(output: &mut W, commands: &[String]) -> Result<(), AgentError> {
    writeln!(output, "{}", commands.join(COMMAND_SEPARATOR))?;
    writeln!(output, "{TURN_END}")?;
    output.flush()?;
    Ok(())
}

/// Answer every observation on `input` until it closes. Returns the number
/// of turns answered.
pub fn serve<R: BufRead, W: Write>(
    agent: &Agent,
    input: R,
    output: &mut W,
) -> Result<usize, AgentError> {
    let mut turns: usize = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let commands = match handle_turn(agent, line) {
            Ok(commands) => commands,
            Err(e) => {
                warn!(error = %e, turn_index = turns, "observation rejected, sending no commands");
                Vec::new()
            }
        };
        debug!(commands = commands.len(), "turn answered");
        write_turn(output, &commands)?;
        turns = turns.saturating_add(1);
    }
    Ok(turns)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use ember_core::PlannerConfig;

    use super::*;

    const LONE_WORKER: &str = r#"{"turn":0,"player":0,"width":4,"height":4,"resources":[{"kind":"wood","x":3,"y":3,"amount":500}],"players":[{"team":0,"units":[{"id":"u_1","kind":"worker","x":0,"y":0}]},{"team":1}]}"#;

    fn agent() -> Agent {
        Agent::new(PlannerConfig::default(), 0)
    }

    #[test]
    fn answers_each_observation() {
        let input = format!("{LONE_WORKER}\n\n{LONE_WORKER}\n");
        let mut output = Vec::new();
        let turns = serve(&agent(), Cursor::new(input), &mut output).unwrap();
        assert_eq!(turns, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "m u_1 e\nD_FINISH\nm u_1 e\nD_FINISH\n"
        );
    }

    #[test]
    fn bad_observation_gets_empty_turn() {
        let input = format!("not json\n{LONE_WORKER}\n");
        let mut output = Vec::new();
        let turns = serve(&agent(), Cursor::new(input), &mut output).unwrap();
        assert_eq!(turns, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nD_FINISH\nm u_1 e\nD_FINISH\n"
        );
    }

    #[test]
    fn impossible_world_is_rejected() {
        let line = r#"{"player":0,"width":2,"height":2,"players":[{"team":0,"units":[{"id":"u_1","kind":"cart","x":5,"y":0}]}]}"#;
        assert!(matches!(
            parse_observation(line),
            Err(AgentError::World(ember_world::WorldError::OutOfBounds(_)))
        ));
    }

    #[test]
    fn missing_controlled_team_is_rejected() {
        let line = r#"{"player":1,"width":2,"height":2,"players":[{"team":0}]}"#;
        assert!(matches!(parse_observation(line), Err(AgentError::World(_))));
    }

    #[test]
    fn commands_are_comma_joined() {
        let mut output = Vec::new();
        write_turn(&mut output, &["r 1 1".to_owned(), "m u_2 n".to_owned()]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "r 1 1,m u_2 n\nD_FINISH\n");
    }
}
