use crate::cards::*;
use crate::gameplay::*;
use wasm_bindgen::prelude::*;

/// A game session for the page. Every method returns the resulting
/// [`Snapshot`] as JSON for the page to draw.
#[wasm_bindgen]
pub struct WasmGame(GameSession);

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(GameSession::new())
    }

    #[wasm_bindgen]
    pub fn seeded(seed: u64) -> Self {
        Self(GameSession::seeded(seed))
    }

    /// Asks for a rank, given either its label ("Q") or a card id ("q-diams").
    #[wasm_bindgen]
    pub fn ask(&mut self, card: &str) -> Result<String, JsValue> {
        let label = card.split('-').next().unwrap_or(card);
        let rank = Rank::try_from(label).map_err(|e| JsValue::from_str(&e))?;
        self.play(Input::Ask(rank))
    }

    #[wasm_bindgen]
    pub fn draw(&mut self) -> Result<String, JsValue> {
        self.play(Input::Draw)
    }

    #[wasm_bindgen]
    pub fn new_game(&mut self) -> Result<String, JsValue> {
        self.play(Input::NewGame)
    }

    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.0.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Element ids of the human's cards, in display order.
    #[wasm_bindgen]
    pub fn card_ids(&self) -> Vec<String> {
        self.0.human().hand().cards().iter().map(Card::id).collect()
    }
}

impl WasmGame {
    fn play(&mut self, input: Input) -> Result<String, JsValue> {
        let mut json = Ok(String::new());
        self.0
            .apply(input, &mut |s: &Snapshot| json = serde_json::to_string(s))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        json.map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_json() {
        let game = WasmGame::seeded(5);
        let json = game.snapshot().unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value["remaining"], 42);
        assert_eq!(value["computer"], 5);
        assert_eq!(value["phase"], "HumanTurn");
        assert_eq!(value["human"].as_array().map(Vec::len), Some(5));
        let ids = game.card_ids();
        let human = value["human"].as_array().unwrap();
        assert!(human.iter().zip(ids.iter()).all(|(v, id)| v == id.as_str()));
    }

    #[test]
    fn asks_by_card_id() {
        let mut game = WasmGame::seeded(5);
        let id = game.card_ids()[0].clone();
        let json = game.ask(&id).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert!(value["phase"] == "HumanTurn" || value["phase"] == "GoFish");
    }

    #[test]
    fn card_ids_match_hand() {
        let game = WasmGame::seeded(9);
        assert_eq!(game.card_ids().len(), 5);
        assert!(game.card_ids().iter().all(|id| id.contains('-')));
    }
}
