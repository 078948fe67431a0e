mod view;

use crate::dictionary::Difficulty;
use crate::error::Error;
use crate::quiz::{Phase, Session};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::info;

const TICK_MS: u64 = 33;

pub enum Launch
{
    Menu,
    Start(Option<Difficulty>),
}

/// Owns the quiz screen: raw mode plus the alternate screen while alive,
/// restored on drop even when the loop bails out with an error.
struct Screen
{
    stdout: Stdout,
}

impl Screen
{
    fn open() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
        Ok(Self { stdout })
    }

    /// Repaints the whole screen with `lines`, top-left first.
    fn draw(&mut self, lines: &[String]) -> io::Result<()>
    {
        write_frame(&mut self.stdout, lines)
    }
}

// Raw mode does not translate `\n`, so every line ends in `\r\n`.
fn write_frame<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    out.write_all(output.as_bytes())?;
    out.flush()
}

impl Drop for Screen
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Clear(ClearType::All), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run(mut session: Session, launch: Launch) -> Result<(), Error>
{
    let mut screen = Screen::open()?;
    if let Launch::Start(difficulty) = launch {
        session.start(difficulty, Instant::now())?;
    }

    screen.draw(&view::render(&session))?;
    let mut last_draw = Instant::now();

    loop {
        // Input before ticks: an answer typed in the last frame counts even if
        // the clock runs out in the same frame.
        if handle_input(&mut session)? {
            break;
        }
        session.advance_clock(Instant::now());

        if last_draw.elapsed() >= Duration::from_millis(TICK_MS) {
            screen.draw(&view::render(&session))?;
            last_draw = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    info!(
        phase = %session.phase(),
        score = session.score(),
        attempts = session.attempts(),
        "player quit"
    );
    Ok(())
}

fn handle_input(session: &mut Session) -> Result<bool, Error>
{
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if apply_key(session, key, Instant::now())? {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Maps one key press onto a session transition. Returns `true` to quit.
fn apply_key(session: &mut Session, key: KeyEvent, now: Instant) -> Result<bool, Error>
{
    let KeyEvent {
        code, modifiers, ..
    } = key;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if ctrl => return Ok(true),
        KeyCode::Char('r') if ctrl => {
            session.restart();
            return Ok(false);
        }
        _ => {}
    }

    match session.phase() {
        Phase::NotStarted => match code {
            KeyCode::Char('1') => session.start(Some(Difficulty::Easy), now)?,
            KeyCode::Char('2') => session.start(Some(Difficulty::Medium), now)?,
            KeyCode::Char('3') => session.start(Some(Difficulty::Hard), now)?,
            KeyCode::Char('4') | KeyCode::Char('a') | KeyCode::Char('A') => session.start(None, now)?,
            KeyCode::Char('q') => return Ok(true),
            _ => {}
        },
        Phase::InProgress => match code {
            KeyCode::Enter => {
                session.submit_input()?;
            }
            KeyCode::Tab => {
                session.skip()?;
            }
            KeyCode::Backspace => session.backspace(),
            KeyCode::Char(ch) if !ctrl => session.push_char(ch),
            _ => {}
        },
        Phase::GameOver => match code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => session.restart(),
            KeyCode::Char('q') => return Ok(true),
            _ => {}
        },
    }

    Ok(false)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::quiz::Settings;

    fn press(session: &mut Session, code: KeyCode) -> bool
    {
        apply_key(session, KeyEvent::new(code, KeyModifiers::NONE), Instant::now()).unwrap()
    }

    fn type_text(session: &mut Session, text: &str)
    {
        for ch in text.chars() {
            press(session, KeyCode::Char(ch));
        }
    }

    fn session() -> Session
    {
        Session::new(
            Dictionary::builtin(),
            Settings {
                duration_secs: 30,
                seed: Some(21),
            },
        )
    }

    #[test]
    fn menu_keys_pick_the_pool()
    {
        for (key, expected) in [
            ('1', Some(Difficulty::Easy)),
            ('2', Some(Difficulty::Medium)),
            ('3', Some(Difficulty::Hard)),
            ('4', None),
            ('a', None),
            ('A', None),
        ] {
            let mut session = session();
            assert!(!press(&mut session, KeyCode::Char(key)));
            assert_eq!(session.phase(), Phase::InProgress);
            assert_eq!(session.difficulty(), expected);
        }
    }

    #[test]
    fn typing_and_enter_submit_the_answer()
    {
        let mut session = session();
        press(&mut session, KeyCode::Char('1'));
        let country = session.current_country().unwrap().to_string();
        let capital = session.dictionary().capitals_of(&country).unwrap().answers()[0].clone();

        type_text(&mut session, &capital.to_lowercase());
        type_text(&mut session, "zz");
        press(&mut session, KeyCode::Backspace);
        press(&mut session, KeyCode::Backspace);
        press(&mut session, KeyCode::Enter);

        assert_eq!(session.score(), 1);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.answer(), "");
    }

    #[test]
    fn tab_skips_the_country()
    {
        let mut session = session();
        press(&mut session, KeyCode::Char('2'));
        type_text(&mut session, "guess");
        press(&mut session, KeyCode::Tab);

        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts(), 1);
        assert!(session.feedback().unwrap().to_string().starts_with("Skipped!"));
    }

    #[test]
    fn quit_keys_work_in_every_phase()
    {
        let mut session = session();
        assert!(press(&mut session, KeyCode::Esc));
        assert!(press(&mut session, KeyCode::Char('q')));

        press(&mut session, KeyCode::Char('1'));
        assert!(!press(&mut session, KeyCode::Char('q')));
        assert_eq!(session.answer(), "q");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(apply_key(&mut session, ctrl_c, Instant::now()).unwrap());
    }

    #[test]
    fn ctrl_r_restarts_mid_game()
    {
        let mut session = session();
        press(&mut session, KeyCode::Char('3'));
        press(&mut session, KeyCode::Tab);
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(!apply_key(&mut session, ctrl_r, Instant::now()).unwrap());

        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn game_over_offers_play_again()
    {
        let start = Instant::now();
        let mut session = session();
        session.start(None, start).unwrap();
        session.advance_clock(start + Duration::from_secs(30));
        assert_eq!(session.phase(), Phase::GameOver);

        type_text(&mut session, "x");
        assert_eq!(session.phase(), Phase::GameOver);
        press(&mut session, KeyCode::Enter);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.time_remaining(), 30);
    }

    #[test]
    fn frame_homes_the_cursor_then_writes_crlf_lines()
    {
        let mut out = Vec::new();
        let lines = vec!["Score: 1 / 2".to_string(), "Answer: _".to_string()];
        write_frame(&mut out, &lines).unwrap();

        let text = String::from_utf8(out).unwrap();
        let body = "Score: 1 / 2\r\nAnswer: _\r\n";
        assert!(text.ends_with(body));
        let prefix = &text[..text.len() - body.len()];
        assert!(prefix.starts_with("\x1b[1;1H"), "prefix was {prefix:?}");
        assert!(prefix.contains("\x1b[2J"));
    }
}
