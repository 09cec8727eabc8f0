//! Eight-slide presentation.

use casebook_docs::{Result, SlideDeck, StyleProfile, TableRenderer, TableSpec};

use super::{SUBTITLE, TITLE};

pub fn build(style: &StyleProfile) -> Result<SlideDeck> {
    let tables = TableRenderer::new(*style);
    let mut deck = SlideDeck::default();

    deck.add_slide(TITLE)
        .set_subtitle(SUBTITLE)
        .add_lines(&["", "", "", "[Name]", "[Class]", "[Date]"]);

    deck.add_slide("Porter's Five Forces")
        .set_subtitle("Global smoothie market: $17.8B, growing ~10%/year");
    let porter = TableSpec::new(
        ["Force", "Rating", "Why"],
        [
            ["New Entrants", "Moderate", "Cold-chain + shelf space are barriers"],
            ["Supplier Power", "Mod-High", "Fruit prices go up and down a lot"],
            ["Buyer Power", "High", "Retailers control shelves"],
            ["Substitutes", "High", "Juice, kombucha, protein shakes etc"],
            ["Rivalry", "High", "Innocent/Coca-Cola, PepsiCo, Danone"],
        ],
    );
    tables.render(&porter, &mut deck)?;

    // The second quadrant pair is an ordinary data row, so it is not bold.
    deck.add_slide("SWOT Analysis");
    let swot = TableSpec::new(
        ["Strengths", "Weaknesses"],
        [
            ["70%+ German market share", "35 employees"],
            ["All-natural, glass bottles", "Outsourced production"],
            ["Bold brand identity", "Controversial marketing"],
            ["Eckes-Granini backing (67%)", "Limited intl experience"],
            ["", ""],
            ["Opportunities", "Threats"],
            ["EU mkt growing 4.4%/yr", "Innocent has Coca-Cola"],
            ["Health trend keeps building", "Fruit price swings"],
            ["Untapped markets nearby", "Ads could backfire abroad"],
        ],
    );
    tables.render(&swot, &mut deck)?;

    deck.add_slide("Market Screening: 192 to 32").add_lines(&[
        "**How he narrowed it down:**",
        "Round 1 (192 to ~80): GDP per capita, population, political stability",
        "Round 2 (~80 to ~50): Cold-chain logistics, modern retail, tariffs",
        "Round 3 (~50 to 32): Proximity to Germany, health trends, Eckes-Granini network",
        "",
        "**Most important filters:**",
        "GDP per capita - premium product needs buyers who can afford it",
        "Cold-chain - smoothies spoil without refrigeration",
        "Proximity - keeps shipping costs down for a small company",
    ]);

    deck.add_slide("Country Rankings")
        .set_subtitle("Weighted scoring model, 10 criteria, scored 1-5");
    let rankings = TableSpec::new(
        ["Rank", "Country", "Score", "Main Reason"],
        [
            ["1", "Netherlands", "4.50", "Next to Germany, high GDP, Eckes-Granini"],
            ["2", "UK", "4.30", "Biggest smoothie market in Europe"],
            ["3", "Denmark", "4.20", "Rich consumers, health culture, EU"],
            ["4", "Sweden", "4.05", "Health-conscious, good infrastructure"],
            ["5", "Belgium", "3.95", "Right next door, EU market"],
        ],
    );
    tables.render(&rankings, &mut deck)?;

    deck.add_slide("Why These Three?").add_lines(&[
        "**Netherlands**",
        "GDP/cap: $73K | 17.8M people | Borders Germany",
        "Eckes-Granini already distributes there | No tariffs",
        "",
        "**United Kingdom**",
        "Biggest smoothie market in Europe | 67M people",
        "Innocent is main competitor | Brexit adds friction",
        "",
        "**Denmark**",
        "GDP/cap: $76K | Strong organic food culture",
        "Gateway to rest of Scandinavia | EU member",
    ]);

    deck.add_slide("Modes of Entry");
    let modes = TableSpec::new(
        ["Mode", "Risk", "Cost", "Control", "Fit for True Fruits"],
        [
            ["Exporting", "Low", "Low", "Low", "Good for now"],
            ["Licensing", "Low", "Low", "Low", "Bad - quality risk"],
            ["Franchising", "Med", "Low", "Med", "Does not apply"],
            ["Joint Venture", "Med", "Med", "Shared", "Good for far markets"],
            ["FDI", "High", "High", "Full", "Too early"],
        ],
    );
    tables.render(&modes, &mut deck)?;

    deck.add_slide("Challenges & Recommendations").add_lines(&[
        "**Internal**",
        "Need to hire - 35 people is not enough",
        "Manufacturer has to handle more volume",
        "Marketing needs to be adapted for new cultures",
        "Glass bottles are heavy and fragile to ship",
        "",
        "**External**",
        "Shelf space is super competitive",
        "Innocent/Coca-Cola will push back",
        "Brexit complicates UK trade",
        "Different countries, different tastes",
        "",
        "**Plan: Go Netherlands first, then UK, then Denmark**",
    ]);

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use casebook_docs::DeckLine;

    #[test]
    fn test_deck_has_eight_slides_in_order() {
        let deck = build(&StyleProfile::slide_deck()).unwrap();
        let titles: Vec<&str> = deck.slides().iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            [
                TITLE,
                "Porter's Five Forces",
                "SWOT Analysis",
                "Market Screening: 192 to 32",
                "Country Rankings",
                "Why These Three?",
                "Modes of Entry",
                "Challenges & Recommendations",
            ]
        );
    }

    #[test]
    fn test_tables_land_on_their_slides() {
        let deck = build(&StyleProfile::slide_deck()).unwrap();
        let counts: Vec<usize> = (0..8).map(|i| deck.tables_on(i).count()).collect();
        assert_eq!(counts, [0, 1, 1, 0, 1, 0, 1, 0]);

        let swot = deck.tables_on(2).next().unwrap();
        assert_eq!(swot.row_count(), 10);
        // "Opportunities" sits in a data row.
        let opportunities = swot.cell(6, 0).unwrap();
        assert_eq!(opportunities.text, "Opportunities");
        assert!(!opportunities.style.bold);
    }

    #[test]
    fn test_bullet_headings_are_parsed() {
        let deck = build(&StyleProfile::slide_deck()).unwrap();
        let last = &deck.slides()[7];
        assert!(matches!(last.lines().first(), Some(DeckLine::Heading(h)) if h.plain_text() == "Internal"));
        assert!(matches!(last.lines()[5], DeckLine::Blank));
        assert_eq!(deck.slides()[1].subtitle(), Some("Global smoothie market: $17.8B, growing ~10%/year"));
    }
}
