use serde::{Deserialize, Serialize};

use crate::engine::roadmap::{DerivedColor, DerivedRoad, RoadmapState};
use crate::engine::{Phase, TableSession};

use super::dto::{HistoryItemDto, RoadmapDto, SettledRoundDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Состояние стола.
    GetTable,

    /// Все дороги.
    GetRoadmap,

    /// История раундов, самые новые первыми.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Roadmap(RoadmapDto),
    History(Vec<HistoryItemDto>),
}

pub fn run_query(session: &TableSession, query: &Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(session)),
        Query::GetRoadmap => QueryResponse::Roadmap(build_roadmap_view(session.roadmap())),
        Query::GetHistory => QueryResponse::History(build_history_view(session)),
    }
}

/// Сформировать DTO стола.
pub fn build_table_view(session: &TableSession) -> TableViewDto {
    let config = session.config();
    let last_round = match session.phase() {
        Phase::Settling(settled) => Some(SettledRoundDto::from(settled)),
        Phase::Betting | Phase::Dealing => None,
    };

    TableViewDto {
        table_id: session.table_id(),
        round_id: session.round_id(),
        phase: session.phase().name().to_string(),
        timer_secs: session.countdown_secs(),
        balance: session.balance(),
        bets: *session.bets(),
        total_bet: session.total_staked(),
        selected_chip: session.selected_chip(),
        chips: config.chips.clone(),
        min_bet: config.min_bet,
        max_bet: config.max_bet,
        can_rebet: session.previous_bets().is_some_and(|b| !b.is_empty()),
        last_round,
    }
}

pub fn build_roadmap_view(roadmap: &RoadmapState) -> RoadmapDto {
    let colors = |road: DerivedRoad| -> Vec<char> {
        roadmap
            .derived(road)
            .iter()
            .map(DerivedColor::symbol)
            .collect()
    };

    RoadmapDto {
        bead: roadmap.bead_plate().iter().map(|w| w.symbol()).collect(),
        big: roadmap.big_road_cells(),
        big_eye: colors(DerivedRoad::BigEyeBoy),
        small: colors(DerivedRoad::SmallRoad),
        roach: colors(DerivedRoad::CockroachPig),
        summary: roadmap.summary(),
    }
}

fn build_history_view(session: &TableSession) -> Vec<HistoryItemDto> {
    session
        .history()
        .iter()
        .map(|record| HistoryItemDto {
            round_id: record.round_id,
            bet: record.bets_description.clone(),
            result: record.winner.to_string(),
            net: record.net_change,
        })
        .collect()
}
