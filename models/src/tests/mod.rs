mod node_info;
