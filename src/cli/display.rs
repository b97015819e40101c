//! Terminal display and UI rendering
//!
//! Features:
//! - Menu with difficulty modes
//! - Round HUD (score, counters, clock, pause state)
//! - Feedback overlay with the revealed answer
//! - Final results screen
//!
//! All player-facing text is picked by the session language here; the quiz
//! core only exposes state.

use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

use crate::quiz::round::RoundState;
use crate::quiz::session::{SessionResults, SessionState};
use crate::quiz::{Difficulty, Language, Outcome};

type DisplayResult = Result<(), Box<dyn std::error::Error>>;

/// Flag image for a country code
pub fn flag_url(code: &str) -> String {
    format!("https://flagcdn.com/w640/{}.png", code)
}

/// Pick the Spanish or English variant of a label
fn text(language: Language, es: &'static str, en: &'static str) -> &'static str {
    match language {
        Language::Spanish => es,
        Language::English => en,
    }
}

fn mode_label(mode: Difficulty, language: Language) -> &'static str {
    match mode {
        Difficulty::Easy => text(language, "Fácil", "Easy"),
        Difficulty::Medium => text(language, "Intermedio", "Medium"),
        Difficulty::Hard => text(language, "Avanzado", "Hard"),
        Difficulty::Expert => text(language, "Experto", "Expert"),
    }
}

/// Color for the remaining seconds
fn clock_color(seconds: u32) -> Color {
    if seconds > 10 {
        Color::Green
    } else if seconds > 5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Terminal display manager
#[derive(Default)]
pub struct Display;

impl Display {
    /// Clear screen
    pub fn clear(&self) -> DisplayResult {
        execute!(stdout(), terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    /// Title line with the current language
    pub fn show_header(&self, language: Language) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Cyan),
            Print(text(language, "Adivina la bandera", "Guess the flag")),
            ResetColor,
            Print(format!("  [{}]\r\n", text(language, "ES", "EN"))),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Difficulty menu
    pub fn show_menu(&self, language: Language, dataset_len: usize) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Magenta),
            Print(text(language, "Elige la dificultad", "Choose difficulty")),
            Print("\r\n"),
            ResetColor,
        )?;

        for (i, mode) in Difficulty::ALL.iter().enumerate() {
            let count = mode.requested_count(dataset_len).min(dataset_len);
            execute!(
                stdout,
                Print(format!(
                    "  {}) {:<11} {} {}\r\n",
                    i + 1,
                    mode_label(*mode, language),
                    count,
                    text(language, "Banderas", "Flags")
                )),
            )?;
        }

        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(text(
                language,
                "  Modo Continentes: Próximamente\r\n",
                "  Continents Mode: Coming Soon\r\n"
            )),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Round HUD: counters, clock, flag and input line
    pub fn show_round(
        &self,
        session: &SessionState,
        round: &RoundState,
        rounds_left: usize,
    ) -> DisplayResult {
        let mut stdout = stdout();
        let language = session.language;
        let round_no = session.total_rounds - rounds_left;
        let mode = session
            .mode
            .map(|mode| mode_label(mode, language))
            .unwrap_or_default();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            Print(format!(
                "{}  |  {} {}/{}  |  ",
                mode,
                text(language, "Ronda", "Round"),
                round_no,
                session.total_rounds
            )),
            SetForegroundColor(Color::Green),
            Print(format!("✓ {}", session.correct_count)),
            ResetColor,
            Print("  "),
            SetForegroundColor(Color::Red),
            Print(format!("✗ {}", session.error_count)),
            ResetColor,
            Print(format!("  |  Score: {}\r\n", session.score)),
        )?;

        execute!(stdout, cursor::MoveTo(0, 4))?;
        if round.paused {
            execute!(
                stdout,
                SetForegroundColor(Color::Yellow),
                Print(text(language, "PAUSA", "PAUSED")),
                ResetColor,
                Print("\r\n"),
            )?;
        } else {
            execute!(
                stdout,
                Print(text(language, "Bandera: ", "Flag: ")),
                SetForegroundColor(Color::Cyan),
                Print(flag_url(&round.country.code)),
                ResetColor,
                Print("\r\n"),
            )?;
        }

        execute!(
            stdout,
            SetForegroundColor(clock_color(round.seconds_remaining)),
            Print(format!("{}s\r\n", round.seconds_remaining)),
            ResetColor,
        )?;

        match &round.feedback {
            Some(feedback) => self.show_feedback(language, feedback.outcome, &feedback.revealed_name)?,
            None => {
                execute!(
                    stdout,
                    cursor::MoveTo(0, 7),
                    SetForegroundColor(Color::Yellow),
                    Print(text(language, "Nombre del país: ", "Country name: ")),
                    ResetColor,
                    Print(&round.input),
                    Print("\r\n"),
                )?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    /// Feedback overlay after an answer or timeout
    fn show_feedback(&self, language: Language, outcome: Outcome, revealed: &str) -> DisplayResult {
        let mut stdout = stdout();
        let (color, label) = match outcome {
            Outcome::Success => (Color::Green, text(language, "¡Correcto!", "Correct!")),
            Outcome::Error => (Color::Red, text(language, "Respuesta:", "Answer:")),
            Outcome::Timeout => (
                Color::Red,
                text(language, "¡Tiempo! Respuesta:", "Time's up! Answer:"),
            ),
        };

        execute!(
            stdout,
            cursor::MoveTo(0, 7),
            SetForegroundColor(color),
            Print(label),
            Print(" "),
            Print(revealed),
            ResetColor,
            Print("\r\n"),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Final results
    pub fn show_results(
        &self,
        language: Language,
        results: &SessionResults,
        rounds_played: u32,
    ) -> DisplayResult {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Blue),
            Print("─".repeat(40)),
            Print("\r\n"),
            ResetColor,
            Print(format!(
                "{} pts  ({} {})\r\n",
                results.score,
                rounds_played,
                text(language, "banderas", "flags")
            )),
            SetForegroundColor(Color::Green),
            Print(format!(
                "{}: {}\r\n",
                text(language, "Correctas", "Correct"),
                results.correct_count
            )),
            SetForegroundColor(Color::Red),
            Print(format!(
                "{}: {}\r\n",
                text(language, "Errores", "Errors"),
                results.error_count
            )),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Key help for the current screen
    pub fn show_help(&self, language: Language, playing: bool) -> DisplayResult {
        let mut stdout = stdout();
        let help = if playing {
            text(
                language,
                "Enter enviar | Esc pausa | Ctrl+R reiniciar | Tab idioma | Ctrl+C salir",
                "Enter submit | Esc pause | Ctrl+R restart | Tab language | Ctrl+C quit",
            )
        } else {
            text(
                language,
                "Enter jugar de nuevo | Tab idioma | q salir",
                "Enter play again | Tab language | q quit",
            )
        };

        execute!(
            stdout,
            cursor::MoveTo(0, 10),
            SetForegroundColor(Color::DarkGrey),
            Print(help),
            Print("\r\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> DisplayResult {
        execute!(stdout(), cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
