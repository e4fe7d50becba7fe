//! The configuration pass: key file in, terminal state out.
//!
//! The palette is recomputed in full on every pass. Properties are set
//! through [`BINDINGS`]; one whose key is absent keeps its live value.

use settings::{apply_all, BindReport, Binding, ConfigDocument, ConfigIssue};
use theme::{Palette, PaletteDefaults, PaletteSink};

use crate::model::{registry, Terminal};

/// Key file entries and the terminal property each one drives.
pub const BINDINGS: &[Binding] = &[
    Binding::new("general", "allow_bold", "allow-bold"),
    Binding::new("general", "audible_bell", "audible-bell"),
    Binding::new("general", "scrollback_lines", "scrollback-lines"),
    Binding::new("general", "scroll_on_keystroke", "scroll-on-keystroke"),
    Binding::new("general", "scroll_on_output", "scroll-on-output"),
    Binding::new("general", "pointer_autohide", "pointer-autohide"),
    Binding::new("cursor", "shape", "cursor-shape"),
    Binding::new("cursor", "blink_mode", "cursor-blink-mode"),
    Binding::new("fonts", "font", "font-desc"),
    Binding::new("fonts", "scale", "font-scale"),
];

/// What one configuration pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    /// Property bindings.
    pub bindings: BindReport,
    /// Palette entries replaced by `color<N>` keys.
    pub overridden_colors: usize,
    /// Color values that could not be parsed.
    pub palette_issues: Vec<ConfigIssue>,
}

impl ApplyReport {
    /// Every issue, palette first.
    pub fn issues(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.palette_issues.iter().chain(&self.bindings.issues)
    }

    /// Issues worth telling the user about. Absent keys are not.
    pub fn problems(&self) -> usize {
        self.issues().filter(|i| !i.is_missing_key()).count()
    }
}

/// Push `document` into `terminal`: palette first, then every binding.
/// Nothing here aborts the pass.
pub fn apply_config(terminal: &mut Terminal, document: &ConfigDocument) -> ApplyReport {
    let outcome = Palette::from_document(document, &PaletteDefaults::default());
    terminal.set_palette(outcome.palette);

    let bindings = apply_all(terminal, registry(), document, BINDINGS);

    let report = ApplyReport {
        bindings,
        overridden_colors: outcome.overridden,
        palette_issues: outcome.issues,
    };
    tracing::info!(
        "Applied {} settings and {} palette overrides ({} problems)",
        report.bindings.applied,
        report.overridden_colors,
        report.problems()
    );
    report
}
