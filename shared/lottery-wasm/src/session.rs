//! Caller-owned state for repeated draws.
//!
//! Keeps the validated request, the random source and the attempt counter, so
//! "draw again" is just another call to `DrawSession::draw`.

use rand::Rng;
use serde::Serialize;

use crate::rng::DrawRng;
use crate::sampler;
use crate::types::DrawRequest;

/// One draw as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drawn {
    /// 1-based index of this draw within its session.
    pub attempt: u32,
    pub numbers: Vec<i64>,
}

pub struct DrawSession<R = DrawRng> {
    request: DrawRequest,
    rng: R,
    attempts: u32,
}

impl DrawSession<DrawRng> {
    /// Session backed by an entropy-seeded `DrawRng`.
    pub fn from_entropy(request: DrawRequest) -> Self {
        Self::new(request, DrawRng::default())
    }
}

impl<R: Rng> DrawSession<R> {
    pub fn new(request: DrawRequest, rng: R) -> Self {
        Self {
            request,
            rng,
            attempts: 0,
        }
    }

    /// Draw with the stored request and bump the attempt counter.
    pub fn draw(&mut self) -> Drawn {
        let result = sampler::draw(&self.request, &mut self.rng);
        self.attempts = self.attempts.saturating_add(1);
        tracing::debug!(attempt = self.attempts, "session draw");

        Drawn {
            attempt: self.attempts,
            numbers: result.into_vec(),
        }
    }

    /// Number of draws made so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn request(&self) -> &DrawRequest {
        &self.request
    }
}
