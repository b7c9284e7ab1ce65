//! Use-Case: Abschlussmeldung eines Terraform-Laufs.

use super::terraform::TerraformCounts;
use crate::host::HostUi;

/// Dialog-Titel der Abschlussmeldung
pub const REPORT_TITLE: &str = "Complete";

/// Ergebnis eines Terraform-Laufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerraformReport {
    pub counts: TerraformCounts,
    /// Ob Löschen für diesen Lauf aktiv war
    pub delete_requested: bool,
}

impl TerraformReport {
    /// Meldungstext; der Lösch-Teil erscheint nur bei aktivem Löschen (auch bei 0).
    pub fn message(&self) -> String {
        let mut msg = format!("Modified {} tiles.", self.counts.modified);
        if self.delete_requested {
            msg.push_str(&format!(" Deleted {} objects.", self.counts.deleted));
        }
        msg
    }
}

/// Zeigt die Abschlussmeldung über den Host an.
pub fn deliver(host: &mut dyn HostUi, report: &TerraformReport) {
    host.show_error(REPORT_TITLE, &report.message());
}
