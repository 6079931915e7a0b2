use grid_astar::{EditorSession, SessionError};

// In this example a path is found on a grid with shape
// S....
// ..#..
// ..#..
// ..#..
// ....E
// S marks the start
// E marks the end
fn main() -> Result<(), SessionError> {
    let mut session = EditorSession::new(5, 5)?;
    for y in 1..4 {
        session.paint_obstacle(2, y)?;
    }
    session.mark_endpoint(0, 0)?;
    session.mark_endpoint(4, 4)?;
    println!("{}", session.grid());
    match session.find_path()? {
        Some(path) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("The path cannot be found."),
    }
    Ok(())
}
