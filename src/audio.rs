//! Sound cues. Playback lives outside this crate; the show only decides
//! when a cue fires and how loud.

use tracing::info;

use crate::sim::TickReport;

pub const BOOM_VOLUME: f32 = 0.4;
pub const MUSIC_VOLUME: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Boom,
    Music,
}

pub trait AudioSink {
    fn play_one_shot(&mut self, cue: Cue, volume: f32);
    fn play_loop(&mut self, cue: Cue, volume: f32);
}

/// Routes a tick's events to the sink, if there is one.
pub struct Cues {
    sink: Option<Box<dyn AudioSink>>,
}

impl Cues {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            info!("no audio output, sound cues will be skipped");
        }
        Self { sink }
    }

    pub fn silent() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn dispatch(&mut self, report: &TickReport) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if report.celebration_started {
            sink.play_loop(Cue::Music, MUSIC_VOLUME);
        }
        for _ in &report.explosions {
            sink.play_one_shot(Cue::Boom, BOOM_VOLUME);
        }
    }
}
