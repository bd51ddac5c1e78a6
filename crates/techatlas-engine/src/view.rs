//! View selection state.
//! See ARCHITECTURE.md §5.5 — the selected sector gates Stage C; the rest is
//! visual emphasis that never feeds back into the pipeline.

use techatlas_taxonomy::Sector;

/// Tracks whether the user is on the cross-sector overview or drilled into
/// one sector, plus which subsector or countries are visually emphasized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    selected_sector: Option<Sector>,
    highlighted_subsector: Option<String>,
    selected_countries: Vec<String>,
}

impl ViewState {
    /// Start on the overview.
    pub fn new() -> Self {
        Self::default()
    }

    /// The only piece of view state the aggregation engine consumes.
    pub fn selected_sector(&self) -> Option<Sector> {
        self.selected_sector
    }

    /// Navigate between overview (None) and a sector drill-down. A subsector
    /// highlight belongs to one sector's key space, so navigation clears it.
    pub fn select_sector(&mut self, sector: Option<Sector>) {
        if self.selected_sector != sector {
            self.highlighted_subsector = None;
        }
        self.selected_sector = sector;
    }

    pub fn highlighted_subsector(&self) -> Option<&str> {
        self.highlighted_subsector.as_deref()
    }

    /// Highlight one subsector of the currently selected sector. Ignored on
    /// the overview or for keys outside the selected sector's taxonomy.
    pub fn highlight_subsector(&mut self, key: Option<&str>) {
        match (self.selected_sector, key) {
            (_, None) => self.highlighted_subsector = None,
            (Some(sector), Some(key)) if sector.has_subsector(key) => {
                self.highlighted_subsector = Some(key.to_string());
            }
            (_, Some(key)) => {
                tracing::debug!(
                    target: "techatlas::engine",
                    "ignoring highlight '{key}' outside the selected sector"
                );
            }
        }
    }

    pub fn selected_countries(&self) -> &[String] {
        &self.selected_countries
    }

    /// Toggle a country in the emphasis set, preserving selection order.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(pos) = self.selected_countries.iter().position(|c| c == country) {
            self.selected_countries.remove(pos);
        } else {
            self.selected_countries.push(country.to_string());
        }
    }

    pub fn clear_countries(&mut self) {
        self.selected_countries.clear();
    }
}
