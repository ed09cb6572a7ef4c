use crate::engine::output::Output;
use crate::world;

pub const HELP_TEXT: &[&str] = &[
    "Inputs are case-sensitive.",
    "- To get room information: Type 'where'.",
    "- To move: Type 'move [direction]'. For example, to move north, type 'move N'.",
    "- To examine objects: Type 'examine [object]'. For example, to examine the sofa, type 'examine Sofa'.",
    "- To see riddle: Type 'riddle'.",
    "- To answer the riddle: Type 'answer'. You will be prompted for your answer.",
    "- To quit: Type 'quit'.",
];

/// Name, optional description, then links and objects when there are any.
pub fn render_room(out: &mut Output, room: &world::Room, world: &world::World) {
    out.rule();
    out.title(room.name.clone(), &room.desc);
    out.blank();

    if !room.links.is_empty() {
        out.heading("Connecting rooms:");
        for (dir, target) in &room.links {
            let name = world
                .room(*target)
                .map(|r| r.name.as_str())
                .unwrap_or("?");
            out.entry(format!("{dir}: {name}"));
        }
        out.blank();
    }

    if !room.objects.is_empty() {
        out.heading("Objects:");
        for name in room.objects.keys() {
            out.entry(name.clone());
        }
        out.blank();
    }
}

pub fn render_help(out: &mut Output) {
    for line in HELP_TEXT {
        out.say(*line);
    }
}

pub fn render_opening(out: &mut Output, world: &world::World) {
    out.rule();
    if !world.title.trim().is_empty() {
        out.heading(world.title.trim());
    }
    for paragraph in world.intro.split("\n\n") {
        out.say(paragraph);
    }
    out.blank();

    if let Some(first) = world.riddles.first() {
        out.say("Here's your first riddle:");
        out.say(first.question.clone());
        out.blank();
    }

    render_help(out);
    out.say("Type 'help' at any time to see the list of valid moves.");
    out.blank();
}

pub fn render_epilogue(out: &mut Output, world: &world::World) {
    for paragraph in world.epilogue.split("\n\n") {
        out.say(paragraph);
    }
    out.blank();
    out.say("THE END. Thanks for playing :)");
}
