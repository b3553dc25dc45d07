use crate::occupancy::{IconFrame, IconMatrix, Instant, Millis, Occupancy, OccupancyBand, Refresh};

#[derive(Debug, Clone, Copy)]
struct Shown {
    band: OccupancyBand,
    frame: IconFrame,
    since: Instant,
}

/// Blinks the icon in the current band's color.
///
/// Alternates the lit and dark frames on the clock rather than by sleeping,
/// and restarts from the lit frame whenever the band changes.
pub struct IconAnimator<'a, const CAP: u16, M>
where
    M: IconMatrix,
{
    state: &'a Occupancy<CAP>,
    matrix: M,
    lit: Millis,
    dark: Millis,
    shown: Option<Shown>,
}

impl<'a, const CAP: u16, M> core::fmt::Debug for IconAnimator<'a, CAP, M>
where
    M: IconMatrix,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IconAnimator")
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, M> IconAnimator<'a, CAP, M>
where
    M: IconMatrix,
{
    pub fn new(state: &'a Occupancy<CAP>, matrix: M, lit: Millis, dark: Millis) -> Self {
        Self {
            state,
            matrix,
            lit,
            dark,
            shown: None,
        }
    }

    pub fn poll(&mut self, now: Instant) -> Refresh {
        let band = self.state.band();
        let frame = match self.shown {
            Some(shown) if shown.band == band => {
                let hold = match shown.frame {
                    IconFrame::Lit => self.lit,
                    IconFrame::Dark => self.dark,
                };
                if now.elapsed_since(shown.since) < hold {
                    return Refresh::Skipped;
                }
                shown.frame.next()
            }
            _ => IconFrame::Lit,
        };

        self.matrix.draw_icon(band, frame);
        self.shown = Some(Shown {
            band,
            frame,
            since: now,
        });
        Refresh::Drawn
    }
}
