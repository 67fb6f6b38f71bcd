//! Дороги (roadmaps): bead plate, big road и три производные дороги.
//!
//! Состояние обновляется одним вызовом `record` на каждый рассчитанный раунд.
//! Никакого времени/случайности внутри: один и тот же поток символов
//! всегда даёт одно и то же состояние.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::hand::{Side, Winner};
use crate::domain::table::RoadLimits;

/// Символ, который потребляют дороги.
pub type RoadSymbol = Winner;

/// Узел big road. Ничья своего узла не получает — она добавляется в `ties`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigRoadNode {
    pub side: Side,
    pub row: u8,
    pub ties: u32,
}

/// Колонка big road. Узлы отсортированы по `row`, колонка никогда не пустая.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigRoadColumn {
    pub nodes: Vec<BigRoadNode>,
}

impl BigRoadColumn {
    fn starting_at(side: Side, row: u8) -> Self {
        Self {
            nodes: vec![BigRoadNode { side, row, ties: 0 }],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_row(&self, row: u8) -> bool {
        self.nodes.iter().any(|n| n.row == row)
    }

    pub fn last(&self) -> Option<&BigRoadNode> {
        self.nodes.last()
    }

    fn insert(&mut self, node: BigRoadNode) {
        self.nodes.push(node);
        self.nodes.sort_by_key(|n| n.row);
    }
}

/// Координата последнего поставленного узла — якорь для производных дорог.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigRoadPosition {
    pub column: usize,
    pub row: u8,
}

/// Плоская ячейка big road для отрисовки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigRoadCell {
    pub column: usize,
    pub row: u8,
    pub side: Side,
    pub ties: u32,
}

/// Цвет производной дороги: Red — форма повторяется, Blue — ломается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DerivedColor {
    Red,
    Blue,
}

impl DerivedColor {
    pub fn symbol(&self) -> char {
        match self {
            DerivedColor::Red => 'R',
            DerivedColor::Blue => 'B',
        }
    }
}

/// Три производные дороги и их сдвиг по колонкам.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DerivedRoad {
    BigEyeBoy,
    SmallRoad,
    CockroachPig,
}

impl DerivedRoad {
    pub const ALL: [DerivedRoad; 3] = [
        DerivedRoad::BigEyeBoy,
        DerivedRoad::SmallRoad,
        DerivedRoad::CockroachPig,
    ];

    pub const fn gap(self) -> usize {
        match self {
            DerivedRoad::BigEyeBoy => 2,
            DerivedRoad::SmallRoad => 3,
            DerivedRoad::CockroachPig => 4,
        }
    }
}

/// Счётчики побед за сессию стола.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadSummary {
    pub banker: u64,
    pub player: u64,
    pub tie: u64,
}

impl RoadSummary {
    pub fn rounds(&self) -> u64 {
        self.banker + self.player + self.tie
    }
}

/// Полное состояние дорог одного стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapState {
    limits: RoadLimits,
    bead: VecDeque<RoadSymbol>,
    columns: VecDeque<BigRoadColumn>,
    big_eye: VecDeque<DerivedColor>,
    small: VecDeque<DerivedColor>,
    cockroach: VecDeque<DerivedColor>,
    summary: RoadSummary,
    /// Сторона последнего не-ничейного результата (текущая серия).
    last_side: Option<Side>,
    /// Где стоит последний узел big road (после обрезки колонок).
    anchor: Option<BigRoadPosition>,
}

impl Default for RoadmapState {
    fn default() -> Self {
        Self::new(RoadLimits::default())
    }
}

impl RoadmapState {
    pub fn new(limits: RoadLimits) -> Self {
        Self {
            limits,
            bead: VecDeque::new(),
            columns: VecDeque::new(),
            big_eye: VecDeque::new(),
            small: VecDeque::new(),
            cockroach: VecDeque::new(),
            summary: RoadSummary::default(),
            last_side: None,
            anchor: None,
        }
    }

    /// Учесть итог одного раунда во всех дорогах.
    pub fn record(&mut self, symbol: RoadSymbol) {
        push_capped(&mut self.bead, symbol, self.limits.bead_entries);

        let side = match symbol {
            Winner::Tie => {
                self.summary.tie += 1;
                self.add_tie_to_last();
                return;
            }
            Winner::Banker => {
                self.summary.banker += 1;
                Side::Banker
            }
            Winner::Player => {
                self.summary.player += 1;
                Side::Player
            }
        };

        let position = self.place_big_road(side);

        for road in DerivedRoad::ALL {
            if let Some(color) = self.derived_color(position, road.gap()) {
                let cap = self.limits.derived_entries;
                push_capped(self.derived_mut(road), color, cap);
            }
        }

        self.prune_columns(position);
    }

    /// Проиграть последовательность символов в свежее состояние.
    pub fn replay<I>(limits: RoadLimits, symbols: I) -> Self
    where
        I: IntoIterator<Item = RoadSymbol>,
    {
        let mut state = Self::new(limits);
        for symbol in symbols {
            state.record(symbol);
        }
        state
    }

    fn add_tie_to_last(&mut self) {
        if let Some(node) = self
            .columns
            .back_mut()
            .and_then(|col| col.nodes.last_mut())
        {
            node.ties += 1;
        }
    }

    /// Поставить узел в big road и вернуть его координату.
    fn place_big_road(&mut self, side: Side) -> BigRoadPosition {
        let continues_streak = self.last_side == Some(side);
        self.last_side = Some(side);

        let last_node = self.columns.back().and_then(|col| col.last()).copied();
        let last_node = match last_node {
            Some(node) if continues_streak => node,
            _ => {
                self.columns.push_back(BigRoadColumn::starting_at(side, 0));
                return BigRoadPosition {
                    column: self.columns.len() - 1,
                    row: 0,
                };
            }
        };

        let max_rows = self.limits.max_rows;
        let next_row = last_node.row.saturating_add(1);

        if let Some(current) = self.columns.back_mut() {
            if next_row < max_rows && !current.has_row(next_row) {
                current.insert(BigRoadNode {
                    side,
                    row: next_row,
                    ties: 0,
                });
                return BigRoadPosition {
                    column: self.columns.len() - 1,
                    row: next_row,
                };
            }
        }

        // Хвост дракона: серия продолжается вправо по нижнему ряду.
        let row = last_node.row.min(max_rows.saturating_sub(1));
        self.columns.push_back(BigRoadColumn::starting_at(side, row));
        BigRoadPosition {
            column: self.columns.len() - 1,
            row,
        }
    }

    /// Цвет производной дороги для только что поставленного узла.
    fn derived_color(&self, at: BigRoadPosition, gap: usize) -> Option<DerivedColor> {
        if at.column < gap {
            return None;
        }
        let left = self.columns.get(at.column - 1)?;
        let compare = self.columns.get(at.column - gap)?;

        let same_shape = if at.row == 0 {
            left.len() == compare.len()
        } else {
            compare.has_row(at.row)
        };

        Some(if same_shape {
            DerivedColor::Red
        } else {
            DerivedColor::Blue
        })
    }

    fn derived_mut(&mut self, road: DerivedRoad) -> &mut VecDeque<DerivedColor> {
        match road {
            DerivedRoad::BigEyeBoy => &mut self.big_eye,
            DerivedRoad::SmallRoad => &mut self.small,
            DerivedRoad::CockroachPig => &mut self.cockroach,
        }
    }

    fn prune_columns(&mut self, mut position: BigRoadPosition) {
        let max = self.limits.max_columns;
        if self.columns.len() > max {
            let excess = self.columns.len() - max;
            self.columns.drain(..excess);
            position.column -= excess;
        }
        self.anchor = Some(position);
    }

    // ---------- чтение ----------

    pub fn limits(&self) -> &RoadLimits {
        &self.limits
    }

    pub fn bead_plate(&self) -> &VecDeque<RoadSymbol> {
        &self.bead
    }

    pub fn big_road(&self) -> &VecDeque<BigRoadColumn> {
        &self.columns
    }

    pub fn derived(&self, road: DerivedRoad) -> &VecDeque<DerivedColor> {
        match road {
            DerivedRoad::BigEyeBoy => &self.big_eye,
            DerivedRoad::SmallRoad => &self.small,
            DerivedRoad::CockroachPig => &self.cockroach,
        }
    }

    pub fn summary(&self) -> RoadSummary {
        self.summary
    }

    pub fn anchor(&self) -> Option<BigRoadPosition> {
        self.anchor
    }

    /// Плоский список ячеек big road (последние `big_road_cells`).
    pub fn big_road_cells(&self) -> Vec<BigRoadCell> {
        let mut cells: Vec<BigRoadCell> = self
            .columns
            .iter()
            .enumerate()
            .flat_map(|(column, col)| {
                col.nodes.iter().map(move |n| BigRoadCell {
                    column,
                    row: n.row,
                    side: n.side,
                    ties: n.ties,
                })
            })
            .collect();

        let cap = self.limits.big_road_cells;
        if cells.len() > cap {
            cells.drain(..cells.len() - cap);
        }
        cells
    }
}

/// FIFO с ограничением: самые старые записи выпадают слева.
fn push_capped<T>(seq: &mut VecDeque<T>, value: T, cap: usize) {
    seq.push_back(value);
    while seq.len() > cap {
        seq.pop_front();
    }
}
