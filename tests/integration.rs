//! Testing methods on chipcore's public API
use chipcore::*;

/// Runs `steps` ticks of `program`, recording diagnostics
fn run(machine: &mut Machine, program: &[u8], steps: usize) -> Vec<Event> {
    let mut events = vec![];
    machine.load_program_bytes(program).unwrap();
    for _ in 0..steps {
        machine.tick_with(&Keypad::default(), &mut events).unwrap();
    }
    events
}

mod scenarios {
    use super::*;

    #[test]
    fn load_and_add() {
        let mut machine = Machine::default();
        let events = run(&mut machine, &[0x65, 0x65, 0x75, 0x05], 2);
        assert!(events.is_empty());
        assert_eq!(0x6a, machine.v()[5]);
        assert_eq!(0x204, machine.pc());
        assert_eq!(2, machine.cycle());
    }

    #[test]
    fn draw_from_i() {
        let mut machine = Machine::default();
        machine.mem_mut().load(0x220, &[0xf0]).unwrap();
        run(&mut machine, &[0xa2, 0x20, 0xd0, 0x01], 2);
        assert_eq!(0x220, machine.i());
        for x in 0..8 {
            assert_eq!(Some(x < 4), machine.screen().get(x, 0));
        }
    }

    #[test]
    fn subroutine() {
        let mut machine = Machine::default();
        let program = [
            0x22, 0x06, // 200: call 206
            0x61, 0x01, // 202: mov #01, v1
            0x12, 0x04, // 204: jmp 204
            0x62, 0x02, // 206: mov #02, v2
            0x00, 0xee, // 208: ret
        ];
        run(&mut machine, &program, 4);
        assert_eq!(&[0u8, 1, 2], &machine.v()[..3]);
        assert_eq!(0x204, machine.pc());
        assert_eq!(0, machine.sp());
        assert!(machine.stack().is_empty());
    }

    #[test]
    fn unimplemented_is_skipped() {
        let mut machine = Machine::default();
        let events = run(&mut machine, &[0x81, 0x24, 0x61, 0x01], 2);
        assert_eq!(
            events,
            [Event::Unimplemented {
                addr: 0x200,
                opcode: 0x8124
            }]
        );
        assert_eq!(1, machine.v()[1]);
    }

    #[test]
    fn runs_off_the_end() {
        let mut machine = Machine::default();
        machine.registers_mut().pc = 0xfff;
        let mut events: Vec<Event> = vec![];
        let err = machine
            .tick_with(&Keypad::default(), &mut events)
            .expect_err("0xfff is odd, and out of room");
        assert!(matches!(
            err,
            Error::Fault(Fault::InvalidProgramCounter { pc: 0xfff })
        ));
        assert!(machine.state().is_halted());
        assert_eq!(1, events.len());
    }

    #[test]
    fn program_too_large() {
        let mut machine = Machine::default();
        let before = machine.clone();
        assert!(matches!(
            machine.load_program_bytes(&[0xff; 0xe01]),
            Err(Error::ProgramTooLarge {
                len: 0xe01,
                entry: 0x200,
                capacity: 0xe00
            })
        ));
        assert_eq!(before, machine);
        // exactly full is fine
        machine.load_program_bytes(&[0xff; 0xe00]).unwrap();
    }

    #[test]
    fn load_missing_file() {
        let mut machine = Machine::default();
        assert!(matches!(
            machine.load_program("this/file/does/not/exist.ch8"),
            Err(Error::IoError(_))
        ));
    }

    #[test]
    fn custom_entry_and_screen() {
        let mut machine = Machine::new(0x600, 128, 64, Flags::default());
        run(&mut machine, &[0x6a, 0x7f, 0x6b, 0x3f, 0xa6, 0x0a, 0xda, 0xb1, 0x16, 0x08, 0x80], 4);
        assert_eq!(Some(true), machine.screen().get(0x7f, 0x3f));
        assert_eq!(128 * 64, machine.screen().pixels().len());
    }

    #[test]
    fn wrap_quirk() {
        let mut machine = Machine::default();
        machine.flags.quirks = Quirks { screen_wrap: true };
        machine.set_v(0, 62).unwrap();
        machine.mem_mut().load(0x300, &[0xf0]).unwrap();
        machine.registers_mut().i = 0x300;
        machine.draw(0, 1, 1).unwrap();
        let lit: Vec<_> = (0..64)
            .filter(|&x| machine.screen().get(x, 0) == Some(true))
            .collect();
        assert_eq!(lit, [0usize, 1, 62, 63]);
    }
}

mod machine {
    use super::*;

    #[test]
    fn set_break() {
        let mut machine = Machine::default();
        let point = 0x234;
        assert_eq!(machine.breakpoints(), &[]);
        // Attempt to set the same breakpoint 100 times
        for _ in 0..100 {
            machine.set_break(point);
        }
        assert_eq!(machine.breakpoints(), &[point]);
    }

    #[test]
    fn unset_break() {
        let mut machine = Machine::default();
        let point = 0x234;
        // set TWO breakpoints
        machine.set_break(point + 2);
        machine.set_break(point);
        assert_eq!(machine.breakpoints(), &[point + 2, point]);
        // Attempt to unset the same breakpoint 100 times
        for _ in 0..100 {
            machine.unset_break(point);
        }
        // Only unset the matching point
        assert_eq!(machine.breakpoints(), &[point + 2]);
    }

    #[test]
    fn set_invalid_reg() {
        let mut machine = Machine::default();
        let machine2 = machine.clone();
        machine
            .set_v(0x21345134, 0xff)
            .expect_err("This should produce an Error::InvalidRegister");
        // no change has been made
        assert_eq!(machine, machine2);
    }

    #[test]
    fn decrement_timers() {
        let mut machine = Machine::default();
        machine.registers_mut().delay = 2;
        machine.registers_mut().sound = 1;
        for _ in 0..3 {
            machine.decrement_timers();
        }
        assert_eq!((0, 0), (machine.delay(), machine.sound()));
    }

    #[test]
    fn halted_stays_halted() {
        let mut machine = Machine::default();
        machine.halt();
        machine.pause();
        machine.singlestep();
        machine.reset();
        assert_eq!(RunState::Halted, machine.state());
        assert!(matches!(
            machine.tick(&Keypad::default()),
            Err(Error::Halted)
        ));
    }

    #[test]
    fn reset_keeps_memory() {
        let mut machine = Machine::default();
        run(&mut machine, &[0x61, 0x23], 1);
        machine.reset();
        assert_eq!(0, machine.v()[1]);
        assert_eq!(0x200, machine.pc());
        assert_eq!(0, machine.cycle());
        assert_eq!(0x6123, machine.mem().read_word(0x200).unwrap());
    }

    #[test]
    fn instruction_fields() {
        let mut machine = Machine::default();
        run(&mut machine, &[0xd1, 0x2f], 1);
        let insn = machine.instruction();
        assert_eq!(0xd12f, insn.opcode());
        assert_eq!(0xd, insn.family());
        assert_eq!((1, 2, 0xf), (insn.x(), insn.y(), insn.n()));
        assert_eq!((0x12f, 0x2f), (insn.nnn(), insn.kk()));
    }
}

mod keypad {
    use super::*;

    #[test]
    fn press_invalid_key() {
        let mut keys = Keypad::default();
        assert!(matches!(
            keys.press(0x21345134),
            Err(Error::InvalidKey { key: 0x21345134 })
        ));
        // no change has been made, everything is safe.
        assert_eq!(keys, Keypad::default());
    }

    #[test]
    fn release_invalid_key() {
        let mut keys = Keypad::default();
        keys.release(0x10).expect_err("This should produce an Error::InvalidKey");
    }

    #[test]
    fn press_release() {
        let mut keys = Keypad::default();
        assert!(keys.press(0x5).unwrap());
        assert!(!keys.press(0x5).unwrap());
        assert!(keys.is_pressed(0x5));
        assert!(keys.release(0x5).unwrap());
        assert!(!keys.is_pressed(0x5));
    }
}

mod dis {
    use super::*;

    #[test]
    fn disassemble_program() {
        let dis = Dis::default();
        let listing: Vec<String> = [0x00e0, 0x6565, 0xa220, 0xd001, 0x8124]
            .into_iter()
            .map(|word| dis.once(word))
            .collect();
        assert!(listing[0].contains("cls"));
        assert!(listing[1].contains("mov    #65, v5"));
        assert!(listing[2].contains("mov    $220, I"));
        assert!(listing[3].contains("draw   #1, v0, v0"));
        assert!(listing[4].contains("inval  8124"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn entry_past_the_end() {
        for entry in [0x1001, 0x2000, 0xffff] {
            let mut machine = Machine::new(entry, 64, 32, Flags::default());
            assert!(matches!(
                machine.load_program_bytes(&[]),
                Err(Error::ProgramTooLarge { len: 0, .. })
            ));
            assert!(machine.load_program_bytes(&[0x00, 0xe0]).is_err());
        }
    }

    #[test]
    fn entry_at_the_end() {
        let mut machine = Machine::new(0x1000, 64, 32, Flags::default());
        machine.load_program_bytes(&[]).unwrap();
        assert!(matches!(
            machine.load_program_bytes(&[0x00]),
            Err(Error::ProgramTooLarge {
                len: 1,
                entry: 0x1000,
                capacity: 0
            })
        ));
    }
}
