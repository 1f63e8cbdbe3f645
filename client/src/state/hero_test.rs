use super::*;

#[test]
fn hero_default_covers_all_slides() {
    let hero = HeroState::default();
    assert_eq!(hero.current(), 0);
    assert_eq!(hero.len(), SLIDES.len());
}

#[test]
fn advance_m_times_lands_on_m_mod_n() {
    for n in 1..=6 {
        let mut hero = HeroState::new(n);
        for m in 0..20 {
            assert_eq!(hero.current(), m % n, "n={n} m={m}");
            hero.advance();
        }
    }
}

#[test]
fn next_wraps_to_zero() {
    let mut hero = HeroState::new(2);
    hero.next();
    assert_eq!(hero.current(), 1);
    hero.next();
    assert_eq!(hero.current(), 0);
}

#[test]
fn prev_wraps_from_zero_to_last() {
    let mut hero = HeroState::new(3);
    hero.prev();
    assert_eq!(hero.current(), 2);
    hero.prev();
    assert_eq!(hero.current(), 1);
}

#[test]
fn prev_undoes_next() {
    let mut hero = HeroState::new(4);
    for _ in 0..7 {
        hero.next();
    }
    for _ in 0..7 {
        hero.prev();
    }
    assert_eq!(hero.current(), 0);
}

#[test]
fn single_slide_stays_put() {
    let mut hero = HeroState::new(1);
    hero.next();
    hero.prev();
    hero.advance();
    assert_eq!(hero.current(), 0);
}

#[test]
fn go_to_jumps_and_ignores_out_of_range() {
    let mut hero = HeroState::new(2);
    hero.go_to(1);
    assert_eq!(hero.current(), 1);
    hero.go_to(5);
    assert_eq!(hero.current(), 1);
}

#[test]
fn empty_carousel_is_inert() {
    let mut hero = HeroState::new(0);
    assert!(hero.is_empty());
    hero.next();
    hero.prev();
    hero.go_to(0);
    assert_eq!(hero.current(), 0);
}
