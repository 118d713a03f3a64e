use log::{error, info};
use rand::rngs::SmallRng;
use tokio::time::{sleep, Duration};

use crate::{
    core::{
        config::HANDOFF_TOKEN,
        game::{Fleet, Seat},
    },
    player::Player,
    protocol::Message,
    transport::Transport,
};

/// Outcome of a duel from one seat's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One seat of a duel. Owns its fleet outright; the opponent's board is only
/// ever seen through shot results coming back over the transport.
pub struct PlayerNode {
    seat: Seat,
    player: Box<dyn Player>,
    fleet: Fleet,
    transport: Box<dyn Transport>,
    enemy_remaining: Option<u8>,
    shots_fired: usize,
    turn_delay: Duration,
}

impl PlayerNode {
    pub fn new(seat: Seat, player: Box<dyn Player>, fleet: Fleet, transport: Box<dyn Transport>) -> Self {
        Self {
            seat,
            player,
            fleet,
            transport,
            enemy_remaining: None,
            shots_fired: 0,
            turn_delay: Duration::ZERO,
        }
    }

    /// Pause after each of this seat's shots before handing the turn over.
    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    /// Play until one side has no ships left. The parent seat shoots first;
    /// the child waits for the parent's first shot.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let mut my_turn = self.seat == Seat::Parent;
        let mut my_seq: u64 = 0;
        let mut expected_recv_seq: u64 = 0;
        loop {
            if my_turn {
                let (row, col) = self.player.select_target(rng);
                self.transport
                    .send(Message::Shot {
                        seq: my_seq,
                        row: row as u8,
                        col: col as u8,
                    })
                    .await?;
                let (outcome, remaining) = match self.transport.recv().await? {
                    Message::ShotResult {
                        seq,
                        outcome,
                        remaining,
                    } if seq == my_seq => (outcome, remaining),
                    other => {
                        error!(
                            "[{}] expected ShotResult for seq {}, got {:?}",
                            self.seat, my_seq, other
                        );
                        return Err(anyhow::anyhow!(
                            "Expected ShotResult for seq {}, got unexpected message (closing duel)",
                            my_seq
                        ));
                    }
                };
                my_seq += 1;
                self.shots_fired += 1;
                self.enemy_remaining = Some(remaining);
                self.player.handle_shot_result((row, col), outcome);
                info!(
                    "{} fires at ({}, {}): {:?}, {} ships left",
                    self.seat, row, col, outcome, remaining
                );
                if remaining == 0 {
                    break;
                }
                if !self.turn_delay.is_zero() {
                    sleep(self.turn_delay).await;
                }
                self.transport.send(Message::handoff()).await?;
                my_turn = false;
            } else {
                match self.transport.recv().await? {
                    Message::Shot { seq, row, col } if seq == expected_recv_seq => {
                        let shot = self
                            .fleet
                            .receive_shot(row as usize, col as usize)
                            .map_err(|e| anyhow::anyhow!(e))?;
                        self.player
                            .handle_incoming_shot((row as usize, col as usize), shot.outcome);
                        self.transport
                            .send(Message::ShotResult {
                                seq,
                                outcome: shot.outcome,
                                remaining: self.fleet.remaining(),
                            })
                            .await?;
                        expected_recv_seq += 1;
                    }
                    other => {
                        error!(
                            "[{}] expected Shot seq {}, got {:?}",
                            self.seat, expected_recv_seq, other
                        );
                        return Err(anyhow::anyhow!(
                            "Expected Shot seq {}, got unexpected message (closing duel)",
                            expected_recv_seq
                        ));
                    }
                }
                if self.fleet.is_defeated() {
                    break;
                }
                // Block until the opponent hands over the turn.
                match self.transport.recv().await? {
                    Message::Handoff { token } if token == HANDOFF_TOKEN => my_turn = true,
                    other => {
                        error!("[{}] expected hand-off, got {:?}", self.seat, other);
                        return Err(anyhow::anyhow!("Expected hand-off, got unexpected message (closing duel)"));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Current status from this seat's point of view.
    pub fn status(&self) -> GameStatus {
        if self.fleet.is_defeated() {
            GameStatus::Lost
        } else if self.enemy_remaining == Some(0) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Total number of shots this seat has fired.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }
}
