//! Critter Kitchen entry point
//!
//! Handles platform-specific initialization. On the web this wires the DOM
//! to a `MixSession`; natively it brews recipes from the command line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement};

    use critter_kitchen::audio::{AudioManager, SoundEffect};
    use critter_kitchen::bestiary::GridCell;
    use critter_kitchen::brew::Fingerprint;
    use critter_kitchen::cauldron::{Cauldron, CauldronSize, Rgb};
    use critter_kitchen::catalog::{self, INGREDIENTS};
    use critter_kitchen::consts::FRAME_MS;
    use critter_kitchen::{Bestiary, Collected, Creature, MixSession, Rarity, Settings};

    /// Bestiary card portrait: box and body size in pixels
    const CARD_PX: f32 = 120.0;
    const CARD_BODY_PX: f32 = 35.0;
    /// Detail modal portrait
    const MODAL_PX: f32 = 200.0;
    const MODAL_BODY_PX: f32 = 60.0;

    /// Game instance holding all state
    struct Game {
        document: Document,
        session: MixSession,
        bestiary: Bestiary,
        settings: Settings,
        cauldron: Cauldron,
        audio: AudioManager,
    }

    impl Game {
        fn new(document: Document, seed: u64, viewport_width: f32) -> Self {
            let settings = Settings::load();
            Self {
                document,
                session: MixSession::new(settings.effective_mix_duration_ms()),
                bestiary: Bestiary::load(),
                cauldron: Cauldron::new(
                    seed,
                    CauldronSize::for_viewport(viewport_width),
                    settings.particle_budget(),
                ),
                audio: AudioManager::new(settings.effective_volume(), seed),
                settings,
            }
        }

        /// Handle a click on a shelf ingredient
        fn add_ingredient(&mut self, id: &str) {
            self.audio.resume();
            let slot = match self.session.add_ingredient(id) {
                Ok(slot) => slot,
                Err(e) => {
                    log::warn!("Can't add {}: {}", id, e);
                    return;
                }
            };
            self.audio.play(SoundEffect::Splash);
            if let Some(color) = catalog::lookup(id).and_then(|ing| Rgb::from_hex(ing.color)) {
                self.cauldron.splash(color);
            }
            self.cauldron.target = self.session.tint();

            let document = &self.document;
            if let Some(slot_el) = document
                .query_selector(&format!(".recipe-slot[data-slot=\"{}\"]", slot))
                .ok()
                .flatten()
            {
                if let Some(ing) = catalog::lookup(id) {
                    slot_el.set_text_content(Some(ing.emoji));
                }
                let _ = slot_el.class_list().add_1("filled");
            }
            if self.session.is_ready() {
                set_hidden(document, "mix-btn", false);
            }
        }

        fn start_mix(&mut self) {
            if let Err(e) = self.session.start_mix() {
                log::warn!("Can't mix yet: {}", e);
                return;
            }
            set_hidden(&self.document, "mix-btn", true);
            self.audio.play(SoundEffect::Mix);
        }

        /// One frame: cauldron effects and the mix timer
        fn frame(&mut self) {
            self.cauldron.step(self.session.is_mixing());

            let revealed = match self.session.advance(FRAME_MS).map(|c| c.cloned()) {
                Ok(revealed) => revealed,
                Err(e) => {
                    log::error!("Brewing failed: {}", e);
                    self.session.reset();
                    None
                }
            };
            if let Some(creature) = revealed {
                self.show_reveal(&creature);
            }

            let document = &self.document;
            if let Some(area) = document
                .query_selector(".cauldron-area")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = area
                    .style()
                    .set_property("--liquid-color", &self.cauldron.liquid().to_css());
            }
        }

        fn show_reveal(&mut self, creature: &Creature) {
            let document = &self.document;
            set_text(document, "creature-name", &creature.name);
            set_text(document, "creature-desc", &creature.description);
            if let Some(el) = document.get_element_by_id("creature-rarity") {
                set_rarity_badge(&el, "creature-rarity", creature.rarity);
            }
            set_hidden(document, "creature-reveal", false);

            self.audio.play(SoundEffect::Reveal(creature.rarity));
            if !self.settings.reduced_motion {
                if let Some(color) = Rgb::from_hex(&creature.primary_color) {
                    self.cauldron.reveal_burst(color);
                }
            }
        }

        fn collect(&mut self) {
            match self.session.collect(&mut self.bestiary) {
                Ok(Collected::New(_)) => self.bestiary.save(),
                Ok(Collected::AlreadyKnown(_)) => {}
                Err(e) => {
                    log::warn!("Nothing to collect: {}", e);
                    return;
                }
            }
            self.audio.play(SoundEffect::Collect);
            self.cauldron.target = self.session.tint();

            self.clear_recipe_panel();
            self.update_bestiary_count();
        }

        /// Hide the reveal panel and empty the slot row
        fn clear_recipe_panel(&self) {
            let document = &self.document;
            set_hidden(document, "creature-reveal", true);
            set_hidden(document, "mix-btn", true);
            if let Ok(slots) = document.query_selector_all(".recipe-slot") {
                for i in 0..slots.length() {
                    if let Some(el) = slots.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        el.set_text_content(Some("?"));
                        let _ = el.class_list().remove_1("filled");
                    }
                }
            }
        }

        /// Let the revealed creature go without collecting it
        fn release(&mut self) {
            match self.session.discard() {
                Ok(creature) => log::info!("Released {}", creature.name),
                Err(e) => {
                    log::warn!("Nothing to release: {}", e);
                    return;
                }
            }
            self.cauldron.target = self.session.tint();
            self.clear_recipe_panel();
        }

        fn open_bestiary(&mut self) {
            if let Some(panel) = self.document.get_element_by_id("bestiary-panel") {
                let _ = panel.class_list().add_1("open");
            }
            set_hidden(&self.document, "bestiary-overlay", false);
            self.render_bestiary_grid();
        }

        fn close_bestiary(&mut self) {
            if let Some(panel) = self.document.get_element_by_id("bestiary-panel") {
                let _ = panel.class_list().remove_1("open");
            }
            set_hidden(&self.document, "bestiary-overlay", true);
        }

        /// Collected critters first, then "???" cards up to the goal
        fn render_bestiary_grid(&self) {
            let document = &self.document;
            let Some(grid) = document.get_element_by_id("bestiary-grid") else {
                return;
            };
            grid.set_inner_html("");
            for cell in self.bestiary.grid(self.settings.bestiary_goal) {
                let Ok(card) = document.create_element("div") else {
                    continue;
                };
                match cell {
                    GridCell::Discovered(creature) => {
                        card.set_class_name("bestiary-card");
                        let _ = card.set_attribute("data-hash", &creature.fingerprint.to_string());
                        if let Some(portrait) = portrait(document, creature, CARD_PX, CARD_BODY_PX) {
                            let _ = card.append_child(&portrait);
                        }
                        if let Ok(name) = document.create_element("div") {
                            name.set_class_name("bestiary-card-name");
                            name.set_text_content(Some(&creature.name));
                            let _ = card.append_child(&name);
                        }
                    }
                    GridCell::Undiscovered => {
                        card.set_class_name("bestiary-card undiscovered");
                        card.set_inner_html(
                            "<div class=\"bestiary-card-silhouette\">❓</div>\
                             <div class=\"bestiary-card-name\">???</div>",
                        );
                    }
                }
                let _ = grid.append_child(&card);
            }
        }

        /// Detail modal for a collected critter
        fn show_creature(&self, fingerprint: Fingerprint) {
            let Some(creature) = self.bestiary.get(fingerprint) else {
                log::warn!("No critter {} in the bestiary", fingerprint);
                return;
            };
            let document = &self.document;

            if let Some(frame) = document.get_element_by_id("modal-creature-portrait") {
                frame.set_inner_html("");
                if let Some(portrait) = portrait(document, creature, MODAL_PX, MODAL_BODY_PX) {
                    let _ = frame.append_child(&portrait);
                }
            }
            set_text(document, "modal-creature-name", &creature.name);
            if let Some(el) = document.get_element_by_id("modal-creature-rarity") {
                set_rarity_badge(&el, "modal-creature-rarity creature-rarity", creature.rarity);
            }
            if let Some(el) = document.get_element_by_id("modal-ingredients") {
                let icons: String = creature
                    .ingredients()
                    .map(|ing| {
                        format!(
                            "<div class=\"modal-ingredient-icon\" title=\"{}\">{}</div>",
                            ing.name, ing.emoji
                        )
                    })
                    .collect();
                el.set_inner_html(&icons);
            }
            set_text(document, "modal-creature-desc", &creature.description);
            set_hidden(document, "creature-modal", false);
        }

        fn close_creature(&mut self) {
            set_hidden(&self.document, "creature-modal", true);
        }

        fn toggle_sound(&mut self) {
            let muted = self.settings.toggle_muted();
            self.audio.set_volume(self.settings.effective_volume());
            self.settings.save();
            set_text(&self.document, "sound-btn", if muted { "🔇" } else { "🔊" });
        }

        /// Reduced motion: no sparkles, instant reveal
        fn toggle_motion(&mut self) {
            let reduced = self.settings.toggle_reduced_motion();
            self.cauldron.set_budget(self.settings.particle_budget());
            self.session
                .set_mix_duration(self.settings.effective_mix_duration_ms());
            self.settings.save();
            log::info!("Reduced motion {}", if reduced { "on" } else { "off" });
        }

        fn update_bestiary_count(&self) {
            let document = &self.document;
            let found = self.bestiary.len();
            let goal = self.settings.bestiary_goal;
            set_text(document, "bestiary-count", &format!("{}/{}", found, goal));
            set_text(document, "bestiary-discovered", &found.to_string());
            set_text(document, "bestiary-total", &goal.to_string());
            if let Some(bar) = document
                .get_element_by_id("bestiary-progress")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let width = format!("{}%", self.bestiary.progress(goal) * 100.0);
                let _ = bar.style().set_property("width", &width);
            }
        }
    }

    fn set_rarity_badge(el: &Element, class: &str, rarity: Rarity) {
        el.set_text_content(Some(rarity.as_str()));
        el.set_class_name(&format!("{} {}", class, rarity.as_str().to_lowercase()));
        if let Some(badge) = el.dyn_ref::<HtmlElement>() {
            let _ = badge.style().set_property("color", rarity.color());
        }
    }

    /// Square box holding the critter's body disc and its spots
    fn portrait(document: &Document, creature: &Creature, px: f32, body: f32) -> Option<Element> {
        let el = document.create_element("div").ok()?;
        el.set_class_name(&format!(
            "creature-portrait body-{} eyes-{} limbs-{} acc-{}",
            creature.body_shape, creature.eye_style, creature.appendage, creature.accessory
        ));
        let _ = el.set_attribute(
            "style",
            &format!(
                "width:{px}px;height:{px}px;--body-size:{body}px;--body-color:{};--body-stroke:{};--accent-color:{}",
                creature.primary_color, creature.secondary_color, creature.accent_color
            ),
        );

        let center = Vec2::splat(px / 2.0);
        for (pos, r) in creature.markings().placed(center, body) {
            let spot = document.create_element("div").ok()?;
            spot.set_class_name("creature-spot");
            let _ = spot.set_attribute(
                "style",
                &format!(
                    "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px",
                    pos.x - r,
                    pos.y - r,
                    r * 2.0,
                    r * 2.0
                ),
            );
            let _ = el.append_child(&spot);
        }
        Some(el)
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = if hidden {
                el.class_list().add_1("hidden")
            } else {
                el.class_list().remove_1("hidden")
            };
        }
    }

    fn on_click(el: &Element, game: &Rc<RefCell<Game>>, action: fn(&mut Game)) {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            action(&mut game.borrow_mut());
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn build_shelf(document: &Document, game: &Rc<RefCell<Game>>) {
        let Some(list) = document.get_element_by_id("ingredient-list") else {
            log::warn!("No #ingredient-list, shelf not built");
            return;
        };
        list.set_inner_html("");
        for ing in &INGREDIENTS {
            let Ok(card) = document.create_element("div") else {
                continue;
            };
            card.set_class_name("ingredient-card");
            let _ = card.set_attribute("data-id", ing.id);
            let _ = card.set_attribute(
                "style",
                &format!("--ingredient-color:{};--ingredient-glow:{}", ing.color, ing.glow),
            );
            card.set_inner_html(&format!(
                "<span class=\"ingredient-emoji\">{}</span><span class=\"ingredient-name\">{}</span>",
                ing.emoji, ing.name
            ));

            let game = game.clone();
            let id = ing.id;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().add_ingredient(id);
            });
            let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            let _ = list.append_child(&card);
        }
    }

    /// One listener for the whole grid; cards carry their fingerprint
    fn wire_bestiary_grid(document: &Document, game: &Rc<RefCell<Game>>) {
        let Some(grid) = document.get_element_by_id("bestiary-grid") else {
            return;
        };
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            let fingerprint = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".bestiary-card[data-hash]").ok().flatten())
                .and_then(|card| card.get_attribute("data-hash"))
                .and_then(|hash| hash.parse::<Fingerprint>().ok());
            if let Some(fingerprint) = fingerprint {
                game.borrow().show_creature(fingerprint);
            }
        });
        let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Clicking outside the modal content closes it
    fn wire_modal_backdrop(document: &Document) {
        let Some(modal) = document.get_element_by_id("creature-modal") else {
            return;
        };
        let backdrop = modal.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            if event
                .target()
                .is_some_and(|t| js_sys::Object::is(&t, &backdrop))
            {
                let _ = backdrop.class_list().add_1("hidden");
            }
        });
        let _ = modal.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Critter Kitchen starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(800.0) as f32;
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(document.clone(), seed, viewport_width)));

        build_shelf(&document, &game);
        let buttons: [(&str, fn(&mut Game)); 9] = [
            ("mix-btn", Game::start_mix),
            ("collect-btn", Game::collect),
            ("release-btn", Game::release),
            ("bestiary-btn", Game::open_bestiary),
            ("bestiary-close", Game::close_bestiary),
            ("bestiary-overlay", Game::close_bestiary),
            ("modal-close", Game::close_creature),
            ("sound-btn", Game::toggle_sound),
            ("motion-btn", Game::toggle_motion),
        ];
        for (id, action) in buttons {
            if let Some(el) = document.get_element_by_id(id) {
                on_click(&el, &game, action);
            }
        }
        wire_bestiary_grid(&document, &game);
        wire_modal_backdrop(&document);
        game.borrow().update_bestiary_count();

        // Frame loop
        let frame_game = game.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            frame_game.borrow_mut().frame();
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            FRAME_MS as i32,
        );
        tick.forget();

        log::info!("Ready ({} critters discovered)", game.borrow().bestiary.len());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            print_usage();
            0
        }
        Some("survey") => {
            survey();
            0
        }
        Some(_) => brew(&args),
    };
    std::process::exit(code);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn print_usage() {
    use critter_kitchen::catalog::INGREDIENTS;

    let ids: Vec<&str> = INGREDIENTS.iter().map(|i| i.id).collect();
    println!("Usage:");
    println!("  critter-kitchen <id> <id> [id]   brew a critter and print it as JSON");
    println!("  critter-kitchen survey           rarity spread over every recipe");
    println!();
    println!("Ingredients: {}", ids.join(", "));
}

/// Brew the recipe given on the command line
#[cfg(not(target_arch = "wasm32"))]
fn brew(ids: &[String]) -> i32 {
    use critter_kitchen::{Recipe, build_creature};

    let recipe = match Recipe::new(ids) {
        Ok(recipe) => recipe,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            return 2;
        }
    };
    let creature = build_creature(&recipe);
    match serde_json::to_string_pretty(&creature) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}

/// Print how rarities fall across all 56 ingredient multisets
#[cfg(not(target_arch = "wasm32"))]
fn survey() {
    use critter_kitchen::{Rarity, all_recipes, rarity};

    let recipes = all_recipes();
    let mut counts = [0usize; 4];
    for recipe in &recipes {
        counts[usize::from(rarity(recipe).tier())] += 1;
    }

    println!("{} recipes", recipes.len());
    for r in Rarity::ALL {
        let n = counts[usize::from(r.tier())];
        println!(
            "  {:<10} {:>3}  {:>5.1}%",
            r.as_str(),
            n,
            n as f64 * 100.0 / recipes.len() as f64
        );
    }
    let fallback = counts[0] + counts[1];
    if fallback > 0 {
        println!(
            "Uncommon share outside curated combos: {:.1}%",
            counts[1] as f64 * 100.0 / fallback as f64
        );
    }
}
