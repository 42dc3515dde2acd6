//! Tests for the chipcore frontend

use super::ui::*;
use chipcore::prelude::*;
use minifb::Key;
use std::{collections::hash_map::DefaultHasher, hash::Hash};

mod ui_builder {
    use super::*;
    #[test]
    fn default() {
        let ui_builder = UIBuilder::default();
        assert_eq!((64, 32), (ui_builder.width, ui_builder.height));
    }
    #[test]
    #[allow(clippy::redundant_clone)]
    fn clone_debug() {
        let ui_builder_clone = UIBuilder::new(128, 64).clone();
        assert_eq!((128, 64), (ui_builder_clone.width, ui_builder_clone.height));
        println!("{ui_builder_clone:?}");
    }
}

mod framebuffer_format {
    use super::*;
    #[test]
    fn default() {
        let _fbf = FrameBufferFormat::default();
    }
    #[test]
    fn clone() {
        let fbf = FrameBufferFormat {
            fg: 0x12345678,
            bg: 0x12345678,
        };
        let fbf2 = fbf.clone();
        assert_eq!(fbf, fbf2);
    }
    #[test]
    fn debug() {
        println!("{:?}", FrameBufferFormat::default());
    }
    #[test]
    fn eq() {
        assert_eq!(FrameBufferFormat::default(), FrameBufferFormat::default());
        assert_ne!(
            FrameBufferFormat {
                fg: 0xff00ff,
                bg: 0x00ff00
            },
            FrameBufferFormat {
                fg: 0x00ff00,
                bg: 0xff00ff
            },
        );
    }
    #[test]
    fn hash() {
        let mut hasher = DefaultHasher::new();
        FrameBufferFormat::default().hash(&mut hasher);
        println!("{hasher:?}");
    }
}

mod framebuffer {
    use super::*;
    #[test]
    fn draw() {
        let format = FrameBufferFormat::default();
        let mut fb = FrameBuffer::new(8, 4);
        let mut screen = Screen::new(8, 4);
        screen.set(1, 0, true);
        screen.set(7, 3, true);
        fb.draw(&screen);
        let lit: Vec<usize> = fb
            .buffer()
            .iter()
            .enumerate()
            .filter(|(_, &px)| px == format.fg)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(lit, [1, 31]);
        assert!(fb.buffer().iter().all(|&px| px == format.fg || px == format.bg));
    }
    #[test]
    fn clone_eq() {
        let fb1 = FrameBuffer::default();
        let fb2 = fb1.clone();
        assert_eq!(fb1, fb2);
        assert_ne!(fb1, FrameBuffer::new(8, 8));
    }
}

mod identify_key {
    use super::*;
    #[test]
    fn keypad_layout() {
        let layout = [
            (Key::Key1, 0x1), (Key::Key2, 0x2), (Key::Key3, 0x3), (Key::Key4, 0xc),
            (Key::Q, 0x4), (Key::W, 0x5), (Key::E, 0x6), (Key::R, 0xd),
            (Key::A, 0x7), (Key::S, 0x8), (Key::D, 0x9), (Key::F, 0xe),
            (Key::Z, 0xa), (Key::X, 0x0), (Key::C, 0xb), (Key::V, 0xf),
        ];
        let mut seen = Keypad::default();
        for (key, hex) in layout {
            assert_eq!(Some(hex), identify_key(key));
            assert!(seen.press(hex).unwrap(), "{hex:x} mapped twice");
        }
    }
    #[test]
    fn unmapped() {
        for key in [Key::Escape, Key::F5, Key::Key5, Key::P, Key::Space] {
            assert_eq!(None, identify_key(key));
        }
    }
}
