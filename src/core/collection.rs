//! Geordnete Kurvensammlung mit Einzelauswahl und Änderungs-Benachrichtigung.
//!
//! Die Reihenfolge der Kurven ist gleichzeitig die Zeichen- und
//! Treffer-Reihenfolge.


use super::curve::{Curve, CurveKind, JoinMethod, RecomputeMode};
use super::point::Point;
use super::record::CurveRecord;

/// Empfänger für "updated"-Ereignisse; erhält die neue Revision.
pub type UpdateListener = Box<dyn FnMut(u64)>;

/// Treffer der Nächste-Kurve-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveHit {
    /// Index der Kurve in der Sammlung
    pub curve: usize,
    /// Index des nächstgelegenen Abtastpunkts
    pub sample: usize,
    pub distance: f64,
}

/// Alle Kurven des Dokuments.
#[derive(Default)]
pub struct CurveCollection {
    curves: Vec<Curve>,
    selected: Option<usize>,
    revision: u64,
    listeners: Vec<UpdateListener>,
}

impl std::fmt::Debug for CurveCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveCollection")
            .field("curves", &self.curves.len())
            .field("selected", &self.selected)
            .field("revision", &self.revision)
            .finish()
    }
}

impl CurveCollection {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    /// Index der ausgewählten Kurve.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_curve(&self) -> Option<&Curve> {
        self.selected.and_then(|index| self.curves.get(index))
    }

    pub fn selected_curve_mut(&mut self) -> Option<&mut Curve> {
        self.selected.and_then(|index| self.curves.get_mut(index))
    }

    /// Aktuelle Änderungs-Revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registriert einen Empfänger für "updated".
    pub fn subscribe(&mut self, listener: UpdateListener) {
        self.listeners.push(listener);
    }

    /// Meldet eine Änderung an alle Empfänger.
    pub fn updated(&mut self) {
        self.revision += 1;
        let revision = self.revision;
        for listener in &mut self.listeners {
            listener(revision);
        }
    }

    /// Hängt eine Kurve an und gibt ihren Index zurück.
    pub fn add(&mut self, mut curve: Curve, selected: bool) -> usize {
        curve.selected = false;
        self.curves.push(curve);
        let index = self.curves.len() - 1;
        log::info!("Kurve hinzugefügt: {}", self.curves[index].summary());
        if selected {
            self.select(index);
        }
        index
    }

    /// Entfernt die Kurve an `index` und korrigiert die Auswahl.
    pub fn remove(&mut self, index: usize) -> Curve {
        let removed = self.curves.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        log::info!("Kurve entfernt: {}", removed.summary());
        removed
    }

    /// Entfernt die ausgewählte Kurve (falls vorhanden).
    pub fn remove_selected(&mut self) -> Option<Curve> {
        let index = self.selected?;
        Some(self.remove(index))
    }

    /// Wählt die Kurve an `index` aus; eine vorherige Auswahl wird aufgehoben.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.curves.len(),
            "Kurven-Index {index} außerhalb des Bereichs ({} Kurven)",
            self.curves.len()
        );
        self.deselect();
        self.curves[index].selected = true;
        self.selected = Some(index);
    }

    /// Hebt die Auswahl auf.
    pub fn deselect(&mut self) {
        if let Some(curve) = self.selected.and_then(|i| self.curves.get_mut(i)) {
            curve.selected = false;
        }
        self.selected = None;
    }

    /// Leert die Sammlung ("Neu").
    pub fn clear(&mut self) {
        self.curves.clear();
        self.selected = None;
        log::info!("Kurvensammlung geleert");
    }

    /// Nächstgelegene sichtbare Kurve zu `target`.
    ///
    /// Ausgeblendete Kurven und Kurven ohne Abtastpunkte werden übersprungen.
    /// Bei gleicher Distanz gewinnt der kleinere Kurven-Index.
    pub fn distance_to_nearest_curve(&self, target: Point) -> Option<CurveHit> {
        self.nearest_curve(target, None)
    }

    /// Wie [`distance_to_nearest_curve`](Self::distance_to_nearest_curve),
    /// ignoriert aber die Kurve an `skip`.
    pub fn distance_to_nearest_other_curve(&self, target: Point, skip: usize) -> Option<CurveHit> {
        self.nearest_curve(target, Some(skip))
    }

    fn nearest_curve(&self, target: Point, skip: Option<usize>) -> Option<CurveHit> {
        let mut best: Option<CurveHit> = None;
        for (index, curve) in self.curves.iter().enumerate() {
            if curve.hidden || skip == Some(index) {
                continue;
            }
            let Some(hit) = curve.nearest_sample(target) else {
                continue;
            };
            match best {
                Some(b) if b.distance <= hit.distance => {}
                _ => {
                    best = Some(CurveHit {
                        curve: index,
                        sample: hit.index,
                        distance: hit.distance,
                    })
                }
            }
        }
        best
    }

    /// Eindeutiger Name `"<Typ> <n>"` für eine neue Kurve.
    pub fn next_name(&self, kind: CurveKind) -> String {
        let label = kind.label();
        (1..)
            .map(|n| format!("{label} {n}"))
            .find(|name| self.curves.iter().all(|c| &c.name != name))
            .unwrap_or_else(|| label.to_string())
    }

    /// Fügt Kurve `right` glatt an das Ende von Kurve `left` an und berechnet sie neu.
    pub fn join_right_smooth(&mut self, left: usize, right: usize, method: JoinMethod) -> bool {
        if left == right {
            log::warn!("Eine Kurve kann nicht an sich selbst angefügt werden");
            return false;
        }
        let (a, b) = if left < right {
            let (head, tail) = self.curves.split_at_mut(right);
            (&head[left], &mut tail[0])
        } else {
            let (head, tail) = self.curves.split_at_mut(left);
            (&tail[0], &mut head[right])
        };
        let joined = a.join_right_smooth(b, method);
        if joined {
            b.recompute(RecomputeMode::Exact);
        }
        joined
    }

    /// Berechnet alle Kurven neu.
    pub fn recompute_all(&mut self, mode: RecomputeMode) {
        for curve in &mut self.curves {
            curve.recompute(mode);
        }
    }

    /// Datensätze aller Kurven in Sammlungs-Reihenfolge.
    pub fn to_records(&self) -> Vec<CurveRecord> {
        self.curves.iter().map(Curve::to_record).collect()
    }

    /// Ersetzt den Inhalt durch die gegebenen Datensätze (exakt neu berechnet).
    ///
    /// Schlägt ein Datensatz fehl, bleibt die Sammlung unverändert.
    pub fn load_records(&mut self, records: &[CurveRecord]) -> anyhow::Result<()> {
        let mut curves = records
            .iter()
            .map(Curve::from_record)
            .collect::<anyhow::Result<Vec<_>>>()?;
        for curve in &mut curves {
            curve.recompute(RecomputeMode::Exact);
        }
        self.curves = curves;
        self.selected = None;
        log::info!("{} Kurven geladen", self.curves.len());
        Ok(())
    }

    /// Erstellt eine neue Sammlung aus Datensätzen.
    pub fn from_records(records: &[CurveRecord]) -> anyhow::Result<Self> {
        let mut collection = Self::new();
        collection.load_records(records)?;
        Ok(collection)
    }
}
