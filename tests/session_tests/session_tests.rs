//! Tests for the request/response session
//!
//! These tests verify:
//! - Commands are written as wire lines and responses decoded in order
//! - Automatic id assignment
//! - Peer rejections vs. closed streams

use std::io::Cursor;

use gtpwire::protocol::{Color, Command, Move, Response, Vertex};
use gtpwire::{Config, GtpError, Session};

fn session(responses: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(Cursor::new(responses.as_bytes().to_vec()), Vec::new())
}

// =============================================================================
// Basic Exchange Tests
// =============================================================================

#[test]
fn test_setup_sequence() {
    let mut s = session("=\n\n=\n\n=\n\n");

    assert_eq!(s.boardsize(19).unwrap().error, None);
    assert_eq!(s.clear_board().unwrap().id, 0);
    assert_eq!(s.komi(6.5).unwrap().error, None);

    let sent = s.into_writer().unwrap();
    assert_eq!(
        String::from_utf8(sent).unwrap(),
        "boardsize 19\nclear_board\nkomi 6.500000\n"
    );
}

#[test]
fn test_identification() {
    let mut s = session("= GNU Go\n\n= 3.8\n\n= name version\n\n");

    assert_eq!(s.name().unwrap().name, "GNU Go");
    assert_eq!(s.version().unwrap().version, "3.8");
    assert_eq!(s.list_commands().unwrap().commands, vec!["name", "version"]);
}

#[test]
fn test_play_and_genmove() {
    let mut s = session("=\n\n= Q16\n\n");

    let mv = Move::Place {
        vertex: Vertex::new(3, 3),
        color: Color::Black,
    };
    assert_eq!(s.play(mv).unwrap().error, None);

    let reply = s.genmove(Color::White).unwrap();
    assert_eq!(reply.mv.vertex(), Some(Vertex::new(15, 15)));

    let sent = String::from_utf8(s.into_writer().unwrap()).unwrap();
    assert_eq!(sent, "play BLACK D4\ngenmove WHITE\n");
}

#[test]
fn test_known_command_and_quit() {
    let mut s = session("= known true\n\n=\n\n");
    assert!(s.known_command("undo").unwrap().known);
    assert_eq!(s.quit().unwrap().id, 0);
}

#[test]
fn test_protocol_version() {
    let mut s = session("= v 2\n\n");
    assert_eq!(s.protocol_version().unwrap().version, 2);
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_rejection_is_not_an_error() {
    let mut s = session("? illegal move\n\n? cannot undo\n\n");

    let resp = s
        .send(Command::Play {
            id: 0,
            mv: Move::Pass { color: Color::Black },
        })
        .unwrap();
    assert_eq!(resp.failure().unwrap().message, "illegal move");

    assert_eq!(s.undo().unwrap().error.unwrap().message, "cannot undo");
}

#[test]
fn test_closed_stream() {
    let mut s = session("");
    let err = s.name().unwrap_err();
    assert!(matches!(err, GtpError::ConnectionClosed));
}

#[test]
fn test_malformed_response() {
    let mut s = session("=1 ZZ\n\n");
    let err = s.genmove(Color::Black).unwrap_err();
    assert!(err.is_parse_error());
}

// =============================================================================
// Id Tests
// =============================================================================

#[test]
fn test_explicit_ids_are_sent() {
    let mut s = session("=7 D4\n\n");
    let resp = s.send(Command::GenMove { id: 7, color: Color::Black }).unwrap();
    assert_eq!(resp.id(), 7);
    assert!(matches!(resp, Response::GenMove(_)));

    let sent = String::from_utf8(s.into_writer().unwrap()).unwrap();
    assert_eq!(sent, "7 genmove BLACK\n");
}

#[test]
fn test_auto_ids() {
    let config = Config::builder().auto_ids(true).first_id(10).build();
    let mut s = Session::with_config(
        Cursor::new(b"=10\n\n=11 GNU Go\n\n=5\n\n".to_vec()),
        Vec::new(),
        config,
    );

    assert_eq!(s.clear_board().unwrap().id, 10);
    assert_eq!(s.name().unwrap().id, 11);
    // explicit ids are left alone
    assert_eq!(s.send(Command::Quit { id: 5 }).unwrap().id(), 5);

    let sent = String::from_utf8(s.into_writer().unwrap()).unwrap();
    assert_eq!(sent, "10 clear_board\n11 name\n5 quit\n");
}

#[test]
fn test_first_id_never_zero() {
    let config = Config::builder().auto_ids(true).first_id(0).build();
    assert_eq!(config.first_id, 1);
}
