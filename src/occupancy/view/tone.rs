use crate::occupancy::{Alert, Buzzer, Occupancy, Subscriber, log::debug};

/// Sounds one-shot alerts.
///
/// At most one sequence plays per cycle, [`Alert::Full`] first. Sequences
/// block for their own duration, so this consumer gets its own task.
pub struct ToneDriver<'a, const CAP: u16, B>
where
    B: Buzzer,
{
    state: &'a Occupancy<CAP>,
    buzzer: B,
}

impl<'a, const CAP: u16, B> core::fmt::Debug for ToneDriver<'a, CAP, B>
where
    B: Buzzer,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToneDriver").finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, B> ToneDriver<'a, CAP, B>
where
    B: Buzzer,
{
    pub fn new(state: &'a Occupancy<CAP>, buzzer: B) -> Self {
        Self { state, buzzer }
    }

    /// Plays the next pending alert, if any, and returns it.
    pub fn poll(&mut self) -> Option<Alert> {
        let alerts = self.state.alerts();
        let alert = [Alert::Full, Alert::JustReset]
            .into_iter()
            .find(|&alert| alerts.take(alert, Subscriber::Tone))?;

        debug!(?alert, "playing alert");
        self.buzzer.play_alert_sequence(alert);
        Some(alert)
    }
}
