extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{CanvasClaimed, CanvasCreated, PixelColored, TokenBurned};
use crate::{CanvasMint, CanvasMintClient};

fn setup() -> (Env, CanvasMintClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CanvasMint, ());
    let client = CanvasMintClient::new(&env, &contract_id);
    (env, client)
}

fn advance_ticks(env: &Env, n: u32) {
    env.ledger().with_mut(|li| li.sequence_number += n);
}

#[test]
fn test_canvas_created_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let start = env.ledger().sequence();

    let canvas = client.create_canvas(&creator, &32, &16, &120);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), canvas_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        canvas.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: CanvasCreated struct
    let event_data: CanvasCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CanvasCreated {
            canvas_id: canvas.id,
            creator: creator.clone(),
            width: 32,
            height: 16,
            start_tick: start,
            max_duration_ticks: 120,
        }
    );
}

#[test]
fn test_pixel_colored_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let editor = Address::generate(&env);
    let canvas = client.create_canvas(&creator, &10, &10, &50);

    client.set_pixel(&canvas.id, &6, &9, &17, &editor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("pixel"), canvas_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pixel").into_val(&env),
        canvas.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: PixelColored struct
    let event_data: PixelColored = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PixelColored {
            canvas_id: canvas.id,
            editor: editor.clone(),
            x: 6,
            y: 9,
            color: 17,
        }
    );
}

/// Repainting the same color is still an accepted write and still observable.
#[test]
fn test_identical_repaint_still_emits() {
    let (env, client) = setup();
    let editor = Address::generate(&env);
    let canvas = client.create_canvas(&Address::generate(&env), &10, &10, &50);

    client.set_pixel(&canvas.id, &1, &1, &5, &editor);
    client.set_pixel(&canvas.id, &1, &1, &5, &editor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let event_data: PixelColored = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PixelColored {
            canvas_id: canvas.id,
            editor: editor.clone(),
            x: 1,
            y: 1,
            color: 5,
        }
    );
}

#[test]
fn test_canvas_claimed_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let canvas = client.create_canvas(&creator, &10, &10, &5);

    advance_ticks(&env, 5);
    client.claim(&canvas.id, &String::from_str(&env, "QmClaimed"), &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("claimed"), canvas_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        canvas.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: CanvasClaimed struct
    let event_data: CanvasClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CanvasClaimed {
            canvas_id: canvas.id,
            creator: creator.clone(),
        }
    );
}

#[test]
fn test_token_burned_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let canvas = client.create_canvas(&creator, &10, &10, &5);

    advance_ticks(&env, 5);
    client.claim(&canvas.id, &String::from_str(&env, "QmBurned"), &creator);
    client.burn_token(&canvas.id, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("burned"), canvas_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("burned").into_val(&env),
        canvas.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: TokenBurned struct
    let event_data: TokenBurned = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TokenBurned {
            canvas_id: canvas.id,
            owner: creator.clone(),
        }
    );
}
