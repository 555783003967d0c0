//! Generation request state shared between the controls and the canvas host.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use mapgen::map::MapData;

/// Seed shown in the input on first load.
pub const DEFAULT_SEED: &str = "riverside";

/// Reactive state for map generation requests.
///
/// The engine owns the live map; this state only carries a completed result
/// from the generator to the canvas host. Each request gets a sequence
/// number, and a completion must echo the number it was issued with —
/// anything older is stale and dropped, so the last-issued request wins.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    /// Current contents of the seed input.
    pub seed: String,
    /// True while a generation request is in flight; disables the button.
    pub generating: bool,
    /// Sequence number of the most recently issued request.
    pub request_seq: u64,
    /// Completed map awaiting pickup by the canvas host.
    pub completed: Option<MapData>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_owned(),
            generating: false,
            request_seq: 0,
            completed: None,
        }
    }
}

impl MapState {
    /// Issue a new generation request: flags it in flight and returns the
    /// sequence number the completion must echo.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.generating = true;
        self.request_seq
    }

    /// Record a finished generation, successful (`Some`) or failed (`None`).
    ///
    /// Stale completions — `seq` older than the latest request — are ignored
    /// entirely: their result is discarded and the in-flight flag stays set
    /// for the newer request. A current completion always clears the flag,
    /// success or failure.
    pub fn finish_request(&mut self, seq: u64, map: Option<MapData>) {
        if seq != self.request_seq {
            return;
        }
        self.generating = false;
        if map.is_some() {
            self.completed = map;
        }
    }

    /// Take the completed map, if any, for loading into the engine.
    pub fn take_completed(&mut self) -> Option<MapData> {
        self.completed.take()
    }
}
