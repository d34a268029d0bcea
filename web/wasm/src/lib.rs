use verideck::{Card, Deck, verify_shuffle};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck,
    last_seed: Option<Vec<u32>>,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            last_seed: None,
        }
    }

    pub fn restore(s: &str) -> Result<WasmDeck, JsValue> {
        let deck = s.parse().map_err(js_err)?;
        Ok(Self {
            deck,
            last_seed: None,
        })
    }

    pub fn shuffle(&mut self, seed: Vec<u32>) -> Result<(), JsValue> {
        let applied = self.deck.shuffle(&seed).map_err(js_err)?;
        self.last_seed = Some(applied);
        Ok(())
    }

    pub fn shuffle_seeded(&mut self, seed: u32) -> Vec<u32> {
        let seed = self.deck.shuffle_seeded(u64::from(seed));
        self.last_seed = Some(seed.clone());
        seed
    }

    pub fn next_card(&mut self) -> Result<JsValue, JsValue> {
        let card = self.deck.get_next().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn deal(&mut self, amount: u32) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self
            .deck
            .deal(amount as usize)
            .map_err(js_err)?
            .into_iter()
            .map(card_to_js)
            .collect();
        to_js_value(&cards)
    }

    pub fn verify_seed(&self, seed: Vec<u32>) -> bool {
        self.deck.verify_seed(&seed)
    }

    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.deck.to_json())
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_wire(&self) -> String {
        self.deck.to_string()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            top: self.deck.top() as u32,
            remaining: self.deck.remaining() as u32,
            hash: self.deck.hash(),
            seed_hash: self.deck.seed_hash(),
            shuffled: self.deck.is_shuffled(),
            next: self.deck.peek().map(card_to_js),
            last_seed: self.last_seed.as_deref(),
        };

        to_js_value(&snapshot)
    }
}

impl Default for WasmDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub fn verify(before: &str, seed: Vec<u32>, expected_hash: &str) -> Result<bool, JsValue> {
    let before: Deck = before.parse().map_err(js_err)?;
    verify_shuffle(&before, &seed, expected_hash).map_err(js_err)
}

#[derive(Serialize)]
struct Snapshot<'a> {
    top: u32,
    remaining: u32,
    hash: &'a str,
    seed_hash: &'a str,
    shuffled: bool,
    next: Option<JsCard>,
    last_seed: Option<&'a [u32]>,
}

#[derive(Serialize)]
struct JsCard {
    mnemonic: String,
    suit: u8,
    rank: u8,
    value: u8,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        mnemonic: card.mnemonic(),
        suit: card.suit().index(),
        rank: card.rank(),
        value: card.value(),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
