use crate::occupancy::{Indicator, Occupancy, OccupancyBand, Refresh};

/// Drives the tri-color indicator; writes only on band changes.
pub struct IndicatorDriver<'a, const CAP: u16, L>
where
    L: Indicator,
{
    state: &'a Occupancy<CAP>,
    indicator: L,
    last_band: Option<OccupancyBand>,
}

impl<'a, const CAP: u16, L> core::fmt::Debug for IndicatorDriver<'a, CAP, L>
where
    L: Indicator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndicatorDriver")
            .field("last_band", &self.last_band)
            .finish_non_exhaustive()
    }
}

impl<'a, const CAP: u16, L> IndicatorDriver<'a, CAP, L>
where
    L: Indicator,
{
    pub fn new(state: &'a Occupancy<CAP>, indicator: L) -> Self {
        Self {
            state,
            indicator,
            last_band: None,
        }
    }

    pub fn poll(&mut self) -> Refresh {
        let band = self.state.band();
        if self.last_band == Some(band) {
            return Refresh::Skipped;
        }
        self.indicator.set_indicator_color(band);
        self.last_band = Some(band);
        Refresh::Drawn
    }
}
