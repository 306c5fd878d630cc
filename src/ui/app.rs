//! Demo application
//!
//! Drives one local player's skill bars and talents from the keyboard and
//! draws every visible bar as a gauge.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use std::sync::Arc;

use crate::audio::{AudioFeedback, Title};
use crate::bar::PlayerBars;
use crate::progression::xp::level_title;
use crate::progression::{SkillPoints, SkillType, Talents};
use crate::PlayerId;

/// Ticks a title stays on screen
const TITLE_TICKS: u32 = 60;

/// Ticks between saves of modified sessions
const FLUSH_TICKS: u64 = 600;

/// Main UI application
pub struct App {
    player: PlayerId,
    bars: PlayerBars,
    talents: Talents,
    skill_points: SkillPoints,
    feedback: Arc<AudioFeedback>,
    /// Latest title and how many ticks it has left
    title: Option<(Title, u32)>,
    /// One-line result of the last action
    status: String,
    ticks: u64,
}

impl App {
    pub fn new(
        player: PlayerId,
        talents: Talents,
        skill_points: SkillPoints,
        feedback: Arc<AudioFeedback>,
    ) -> Result<Self> {
        talents.store().join(player)?;
        Ok(Self {
            player,
            bars: PlayerBars::new(player),
            talents,
            skill_points,
            feedback,
            title: None,
            status: "Press m/c/f/s to train a skill, u to unlock a talent".to_string(),
            ticks: 0,
        })
    }

    /// Points awarded per key press
    fn gather_amount(skill: SkillType) -> u32 {
        match skill {
            SkillType::Mining => 7,
            SkillType::Combat => 12,
            SkillType::Farming => 5,
            SkillType::Fishing => 9,
        }
    }

    /// Handle a key press; returns true to quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        let skill = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('u') => {
                self.unlock_next()?;
                return Ok(false);
            }
            KeyCode::Char('m') => SkillType::Mining,
            KeyCode::Char('c') => SkillType::Combat,
            KeyCode::Char('f') => SkillType::Farming,
            KeyCode::Char('s') => SkillType::Fishing,
            _ => return Ok(false),
        };

        let amount = Self::gather_amount(skill);
        let levels = self.skill_points.give(&mut self.bars, skill, amount)?;
        let won = self.talents.roll_point(self.player, 1)?;
        self.status = format!(
            "+{} {}{}{}",
            amount,
            skill.display_name(),
            if levels > 0 { ", level up!" } else { "" },
            if won { ", talent point!" } else { "" },
        );
        Ok(false)
    }

    fn unlock_next(&mut self) -> Result<()> {
        let state = self.talents.store().session(self.player)?.lock().clone();
        let next = self.talents.data().available(&state).next().map(|t| (t.id.clone(), t.name.clone()));
        self.status = match next {
            Some((id, name)) => {
                if self.talents.unlock(self.player, &id)? {
                    format!("Unlocked {}", name)
                } else {
                    format!("Cannot unlock {} yet", name)
                }
            }
            None => "Every talent is unlocked".to_string(),
        };
        Ok(())
    }

    /// Advance one simulation tick
    pub fn tick(&mut self) {
        self.bars.tick_all();
        self.ticks += 1;

        if let Some(title) = self.feedback.drain_titles().into_iter().filter(|t| t.player == self.player).last() {
            self.title = Some((title, TITLE_TICKS));
        }
        self.title = self
            .title
            .take()
            .and_then(|(title, left)| (left > 1).then_some((title, left - 1)));
        if self.ticks % FLUSH_TICKS == 0 {
            let saved = self.talents.store().flush_modified();
            if saved > 0 {
                log::debug!("Flushed {} progression sessions", saved);
            }
        }
    }

    /// Save and release the player's state
    pub fn shutdown(&mut self) {
        self.bars.detach();
        self.talents.store().leave(self.player);
    }

    pub fn render(&self, frame: &mut Frame) {
        let visible: Vec<_> = self.bars.visible().collect();
        let mut constraints: Vec<Constraint> = visible.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(6));
        constraints.push(Constraint::Length(4));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        for (bar, area) in visible.iter().zip(chunks.iter()) {
            let skill_bar = bar.bar();
            let (r, g, b) = skill_bar.color().rgb();
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title(skill_bar.title().to_string()))
                .gauge_style(Style::default().fg(Color::Rgb(r, g, b)))
                .ratio(skill_bar.progress())
                .label(format!("{:.0}%", skill_bar.progress() * 100.0));
            frame.render_widget(gauge, *area);
        }

        let status_area = chunks[visible.len()];
        let title_area = chunks[visible.len() + 1];
        frame.render_widget(self.status_panel(), status_area);

        let title_lines = match &self.title {
            Some((title, _)) => vec![
                Line::from(Span::styled(
                    title.title.clone(),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(title.subtitle.clone(), Style::default().fg(Color::White))),
            ],
            None => vec![Line::from("")],
        };
        let title_para = Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title_para, title_area);
    }

    fn status_panel(&self) -> Paragraph<'static> {
        let mut lines = vec![Line::from(Span::styled(
            self.status.clone(),
            Style::default().fg(Color::Yellow),
        ))];

        if let Ok(session) = self.talents.store().session(self.player) {
            let state = session.lock().clone();
            let cost = self.talents.data().cost_for(&state);
            lines.push(Line::from(format!(
                "Talent points: {}  next talent: {}  owned: {}",
                state.talent_points,
                cost,
                state.talent_count()
            )));
            let skills: Vec<String> = SkillType::ALL
                .iter()
                .map(|&skill| {
                    let record = state.skill(skill);
                    format!(
                        "{} {} {} ({}/{})",
                        skill.display_name(),
                        level_title(record.level),
                        record.level,
                        record.points,
                        record.required()
                    )
                })
                .collect();
            lines.push(Line::from(Span::styled(skills.join("  "), Style::default().fg(Color::Gray))));
        }
        lines.push(Line::from(Span::styled(
            "[M]ine [C]ombat [F]arm fi[S]h  [U]nlock  [Q]uit",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Skillforge"))
    }
}
